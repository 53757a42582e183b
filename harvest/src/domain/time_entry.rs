use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked duration, optionally bound to a calendar day. Entries without
/// a `spent_date` exist in Harvest but cannot be placed on a calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub spent_date: Option<NaiveDate>,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TimeEntry {
    /// Zero-duration stand-in for a workday without any tracked time.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            id: None,
            spent_date: Some(date),
            hours: 0.0,
            notes: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
    }
}

/// One page of the `/time_entries` listing. A missing `next_page` marks
/// the last page.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntriesPage {
    pub time_entries: Vec<TimeEntry>,
    #[serde(default)]
    pub next_page: Option<i64>,
}
