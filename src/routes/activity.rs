use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{ActivityMetric, ActivityPoint};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_daily_activity))
}

#[derive(Debug, Deserialize)]
struct ActivityQuery {
    metric: String,
}

async fn get_daily_activity(
    Query(params): Query<ActivityQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityPoint>>, AppError> {
    info!("GET /activity - metric={}", params.metric);
    let metric: ActivityMetric = params.metric.parse()?;
    let points = services::activity_service::daily(state.provider.as_ref(), &state.config, metric)
        .await
        .map_err(|e| {
            error!("Failed to get daily activity: {}", e);
            e
        })?;
    Ok(Json(points))
}
