use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::CategorySlice;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roles", get(get_roles))
        .route("/orgs", get(get_orgs))
        .route("/repos", get(get_repos))
}

async fn get_roles(State(state): State<AppState>) -> Result<Json<Vec<CategorySlice>>, AppError> {
    info!("GET /developers/roles - Developers by role");
    let slices = services::developer_service::roles(state.provider.as_ref(), &state.config)
        .await
        .map_err(|e| {
            error!("Failed to get developer roles: {}", e);
            e
        })?;
    Ok(Json(slices))
}

async fn get_orgs(State(state): State<AppState>) -> Result<Json<Vec<CategorySlice>>, AppError> {
    info!("GET /developers/orgs - Developers by organization");
    let slices = services::developer_service::orgs(state.provider.as_ref(), &state.config)
        .await
        .map_err(|e| {
            error!("Failed to get developers by org: {}", e);
            e
        })?;
    Ok(Json(slices))
}

async fn get_repos(State(state): State<AppState>) -> Result<Json<Vec<CategorySlice>>, AppError> {
    info!("GET /developers/repos - Developers by repository");
    let slices = services::developer_service::repos(state.provider.as_ref(), &state.config)
        .await
        .map_err(|e| {
            error!("Failed to get developers by repo: {}", e);
            e
        })?;
    Ok(Json(slices))
}
