use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Dataset;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,
}

/// Read side of the hosted analytics API: one ordered, pre-aggregated
/// result set per query id.
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    async fn fetch_latest(&self, query_id: Uuid) -> Result<Dataset, ProviderError>;
}
