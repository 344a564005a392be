use async_trait::async_trait;
use uuid::Uuid;

use crate::external::dataset_provider::{DatasetProvider, ProviderError};
use crate::models::{Dataset, Row};

/// Flipside Crypto's query result API. Every curated query exposes its
/// latest run at /api/v2/queries/{id}/data/latest as a JSON array of rows.
pub struct FlipsideProvider {
    client: reqwest::Client,
    base_url: String,
}

impl FlipsideProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl DatasetProvider for FlipsideProvider {
    async fn fetch_latest(&self, query_id: Uuid) -> Result<Dataset, ProviderError> {
        let url = format!(
            "{}/api/v2/queries/{}/data/latest",
            self.base_url.trim_end_matches('/'),
            query_id
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !resp.status().is_success() {
            return Err(ProviderError::BadResponse(format!(
                "query {} returned {}",
                query_id,
                resp.status()
            )));
        }

        let rows = resp
            .json::<Vec<Row>>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(Dataset::new(rows))
    }
}
