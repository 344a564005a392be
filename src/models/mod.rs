mod activity;
mod category;
mod chart;
pub mod dataset;
mod metrics;
mod price_point;
mod time_range;

pub use activity::{ActivityMetric, ActivityPoint};
pub use category::CategorySlice;
pub use chart::{CurrentPrice, PriceHistoryResponse, SeriesMeta};
pub use dataset::{Dataset, Row};
pub use metrics::SummaryMetrics;
pub use price_point::PricePoint;
pub use time_range::TimeRange;
