use crate::errors::AppError;
use crate::models::dataset::{date_field, datetime_field, f64_field, i64_field, str_field};
use crate::models::{ActivityMetric, ActivityPoint, CategorySlice, Dataset, PricePoint};

// Column names are fixed by the hosted queries.
pub(crate) const HOUR: &str = "HOUR";
pub(crate) const HOURLY_PRICE: &str = "HOURLY_PRICE";
pub(crate) const DATE: &str = "DATE";

/// Projects the hourly price result set to plottable (hour, price) pairs,
/// preserving row order. Zero rows project to zero pairs; a missing column
/// in any row is an error, never a silently thinner chart.
pub fn price_series(dataset: &Dataset) -> Result<Vec<PricePoint>, AppError> {
    dataset
        .rows
        .iter()
        .map(|row| {
            Ok(PricePoint {
                hour: datetime_field(row, HOUR)?,
                price: f64_field(row, HOURLY_PRICE)?,
            })
        })
        .collect()
}

/// Projects the daily activity result set to (date, count) pairs for the
/// requested metric.
pub fn daily_activity(
    dataset: &Dataset,
    metric: ActivityMetric,
) -> Result<Vec<ActivityPoint>, AppError> {
    dataset
        .rows
        .iter()
        .map(|row| {
            Ok(ActivityPoint {
                date: date_field(row, DATE)?,
                count: i64_field(row, metric.column())?,
            })
        })
        .collect()
}

/// Projects a result set to (label, value) pairs for a pie chart. Duplicate
/// labels and zero values pass through untouched; aggregation is the
/// upstream query's job.
pub fn category_share(
    dataset: &Dataset,
    label_field: &str,
    value_field: &str,
) -> Result<Vec<CategorySlice>, AppError> {
    dataset
        .rows
        .iter()
        .map(|row| {
            Ok(CategorySlice {
                label: str_field(row, label_field)?,
                value: f64_field(row, value_field)?,
            })
        })
        .collect()
}
