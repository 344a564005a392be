use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::SummaryMetrics;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_summary))
}

async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryMetrics>, AppError> {
    info!("GET /metrics - Overall metrics");
    let metrics = services::metrics_service::summary(state.provider.as_ref(), &state.config)
        .await
        .map_err(|e| {
            error!("Failed to get summary metrics: {}", e);
            e
        })?;
    Ok(Json(metrics))
}
