use axum::http::{HeaderMap, HeaderValue};
use axum::response::IntoResponse;
use reqwest::StatusCode;
use thiserror::Error;

use crate::external::dataset_provider::ProviderError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown time range selector '{0}'")]
    UnknownSelector(String),
    #[error("dataset is missing required field '{0}'")]
    MissingField(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Rate limited by analytics provider")]
    RateLimited,
    #[error("External error: {0}")]
    External(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::UnknownSelector(token) => (
                StatusCode::BAD_REQUEST,
                format!("unknown time range selector '{}'", token),
            )
                .into_response(),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::RateLimited => {
                let mut headers = HeaderMap::new();
                headers.insert("Retry-After", HeaderValue::from_static("60"));
                (StatusCode::TOO_MANY_REQUESTS, headers, "Rate limited").into_response()
            }
            // The column set is fixed upstream, so a missing column means a
            // malformed upstream dataset.
            AppError::MissingField(field) => (
                StatusCode::BAD_GATEWAY,
                format!("dataset is missing required field '{}'", field),
            )
                .into_response(),
            AppError::External(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(value: ProviderError) -> Self {
        match value {
            ProviderError::RateLimited => AppError::RateLimited,
            other => AppError::External(other.to_string()),
        }
    }
}
