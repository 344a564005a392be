use tracing::error;

use crate::config::Config;
use crate::errors::AppError;
use crate::external::dataset_provider::DatasetProvider;
use crate::models::dataset::i64_field;
use crate::models::{Row, SummaryMetrics};

/// Headline counters, extracted from the single-row summary result set.
/// An empty result set here means the upstream query broke; rendering
/// zeroes for it would be a lie, so it is surfaced as an error.
pub async fn summary(
    provider: &dyn DatasetProvider,
    config: &Config,
) -> Result<SummaryMetrics, AppError> {
    let dataset = provider
        .fetch_latest(config.queries.summary_metrics)
        .await
        .map_err(|e| {
            error!("Failed to fetch summary metrics dataset: {}", e);
            AppError::from(e)
        })?;

    let row = dataset
        .rows
        .first()
        .ok_or_else(|| AppError::External("summary metrics result set is empty".to_string()))?;

    from_row(row)
}

fn from_row(row: &Row) -> Result<SummaryMetrics, AppError> {
    Ok(SummaryMetrics {
        organizations: i64_field(row, "Organizations")?,
        repositories: i64_field(row, "Repositories")?,
        developers: i64_field(row, "Developers")?,
        prs: i64_field(row, "PRs")?,
        actions: i64_field(row, "Actions")?,
        issues: i64_field(row, "Issues")?,
    })
}
