use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// One hourly price observation for the tracked blockchain. The upstream
// query emits rows in non-decreasing hour order and the core preserves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub hour: DateTime<Utc>,
    pub price: f64,
}
