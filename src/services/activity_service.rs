use tracing::error;

use crate::config::Config;
use crate::errors::AppError;
use crate::external::dataset_provider::DatasetProvider;
use crate::models::{ActivityMetric, ActivityPoint};
use crate::services::chart_service;

/// Daily developer activity for one metric. The bar charts always show the
/// full history; no time windowing applies here.
pub async fn daily(
    provider: &dyn DatasetProvider,
    config: &Config,
    metric: ActivityMetric,
) -> Result<Vec<ActivityPoint>, AppError> {
    let dataset = provider
        .fetch_latest(config.queries.daily_activity)
        .await
        .map_err(|e| {
            error!("Failed to fetch daily activity dataset: {}", e);
            AppError::from(e)
        })?;
    chart_service::daily_activity(&dataset, metric)
}
