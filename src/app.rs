use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{activity, developers, health, metrics, prices};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The dashboard frontend is served from a different origin.
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/price", prices::router())
        .nest("/api/metrics", metrics::router())
        .nest("/api/activity", activity::router())
        .nest("/api/developers", developers::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
