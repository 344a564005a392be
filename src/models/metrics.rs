use serde::{Deserialize, Serialize};

/// Headline counters shown at the top of the dashboard. The upstream query
/// returns them as a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub organizations: i64,
    pub repositories: i64,
    pub developers: i64,
    pub prs: i64,
    pub actions: i64,
    pub issues: i64,
}
