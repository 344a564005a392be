use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::PricePoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPrice {
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub points: usize,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistoryResponse {
    pub series: Vec<PricePoint>,
    pub meta: SeriesMeta,
}
