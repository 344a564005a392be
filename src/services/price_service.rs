use chrono::{DateTime, Utc};
use tracing::error;

use crate::config::Config;
use crate::errors::AppError;
use crate::external::dataset_provider::DatasetProvider;
use crate::models::dataset::{f64_field, str_field};
use crate::models::{Dataset, PriceHistoryResponse, PricePoint, SeriesMeta, TimeRange};
use crate::services::chart_service;

const BLOCKCHAIN: &str = "BLOCKCHAIN";

/// Keeps the points whose hour falls inside the selected window, computed
/// from the supplied `now`. Pure: the same (points, range, now) always
/// yields the same subsequence, in original order. Callers inject `now`
/// rather than reading the clock here.
pub fn filter_by_time_range(
    points: &[PricePoint],
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<PricePoint> {
    match range.duration() {
        None => points.to_vec(),
        Some(window) => {
            let start = now - window;
            points.iter().filter(|p| p.hour >= start).cloned().collect()
        }
    }
}

/// Latest observed price, straight from the current-price result set.
pub async fn current_price(
    provider: &dyn DatasetProvider,
    config: &Config,
) -> Result<f64, AppError> {
    let dataset = provider
        .fetch_latest(config.queries.current_price)
        .await
        .map_err(|e| {
            error!("Failed to fetch current price dataset: {}", e);
            AppError::from(e)
        })?;
    let row = dataset
        .rows
        .first()
        .ok_or_else(|| AppError::External("current price result set is empty".to_string()))?;
    f64_field(row, chart_service::HOURLY_PRICE)
}

/// Hourly price series for the configured blockchain, windowed by `range`.
pub async fn price_history(
    provider: &dyn DatasetProvider,
    config: &Config,
    range: TimeRange,
    now: DateTime<Utc>,
) -> Result<PriceHistoryResponse, AppError> {
    let dataset = provider
        .fetch_latest(config.queries.hourly_price)
        .await
        .map_err(|e| {
            error!("Failed to fetch hourly price dataset: {}", e);
            AppError::from(e)
        })?;

    let dataset = for_blockchain(dataset, &config.blockchain)?;
    let series = chart_service::price_series(&dataset)?;
    let series = filter_by_time_range(&series, range, now);

    let meta = SeriesMeta {
        points: series.len(),
        start: series.first().map(|p| p.hour),
        end: series.last().map(|p| p.hour),
        range: range.to_string(),
    };

    Ok(PriceHistoryResponse { series, meta })
}

// The hourly price query covers every chain it tracks; keep one.
fn for_blockchain(dataset: Dataset, blockchain: &str) -> Result<Dataset, AppError> {
    let mut rows = Vec::with_capacity(dataset.rows.len());
    for row in dataset.rows {
        if str_field(&row, BLOCKCHAIN)? == blockchain {
            rows.push(row);
        }
    }
    Ok(Dataset::new(rows))
}
