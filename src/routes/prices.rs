use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{CurrentPrice, PriceHistoryResponse, TimeRange};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/current", get(get_current_price))
        .route("/history", get(get_price_history))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    // Required: the dashboard always submits a selection, so a missing
    // range is a caller bug, not a case to default away.
    range: String,
}

async fn get_current_price(
    State(state): State<AppState>,
) -> Result<Json<CurrentPrice>, AppError> {
    info!("GET /price/current - Getting latest price");
    let price = services::price_service::current_price(state.provider.as_ref(), &state.config)
        .await
        .map_err(|e| {
            error!("Failed to get current price: {}", e);
            e
        })?;
    Ok(Json(CurrentPrice { price }))
}

async fn get_price_history(
    Query(params): Query<HistoryQuery>,
    State(state): State<AppState>,
) -> Result<Json<PriceHistoryResponse>, AppError> {
    info!("GET /price/history - range={}", params.range);
    let range: TimeRange = params.range.parse()?;
    let history = services::price_service::price_history(
        state.provider.as_ref(),
        &state.config,
        range,
        Utc::now(),
    )
    .await
    .map_err(|e| {
        error!("Failed to get price history: {}", e);
        e
    })?;
    Ok(Json(history))
}
