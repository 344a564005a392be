use serde::{Deserialize, Serialize};

/// One pie slice: a category label with its value. Reused for developer
/// roles, organizations and repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub label: String,
    pub value: f64,
}
