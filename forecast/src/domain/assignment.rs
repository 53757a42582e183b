use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled block of work for one person on one project. `allocation`
/// is seconds per day over the date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub allocation: Option<i64>,
    pub person_id: i64,
    pub project_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Assignment {
    /// Daily allocation expressed in hours.
    pub fn hours_per_day(&self) -> Option<f64> {
        self.allocation.map(|seconds| seconds as f64 / 3600.0)
    }
}
