use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use devactivity_backend::app;
use devactivity_backend::config::Config;
use devactivity_backend::external::flipside::FlipsideProvider;
use devactivity_backend::logging::{self, LoggingConfig};
use devactivity_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let port = config.port;

    tracing::info!("📊 Reading analytics datasets from {}", config.api_base_url);
    let provider = Arc::new(FlipsideProvider::new(config.api_base_url.clone()));

    let state = AppState {
        provider,
        config: Arc::new(config),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Developer activity backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
