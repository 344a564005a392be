use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One calendar day of developer activity, plotted as a bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub date: NaiveDate,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityMetric {
    Developers,
    Prs,
    Issues,
}

impl ActivityMetric {
    /// Column carrying this metric in the daily activity result set.
    pub fn column(self) -> &'static str {
        match self {
            ActivityMetric::Developers => "Developers",
            ActivityMetric::Prs => "PRs",
            ActivityMetric::Issues => "Issues",
        }
    }
}

impl FromStr for ActivityMetric {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "developers" => Ok(ActivityMetric::Developers),
            "prs" => Ok(ActivityMetric::Prs),
            "issues" => Ok(ActivityMetric::Issues),
            _ => Err(AppError::Validation(format!(
                "unknown activity metric '{}'. Supported: developers, prs, issues",
                raw.trim()
            ))),
        }
    }
}
