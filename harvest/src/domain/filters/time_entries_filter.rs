use chrono::NaiveDate;

use super::HarvestFilter;

/// Filter for the `/time_entries` listing: a target user, an inclusive
/// upper bound on the spent date, and the page cursor handed back by the
/// previous page.
#[derive(Debug, Default, Clone)]
pub struct TimeEntriesFilter {
    pub user_id: Option<i64>,
    pub to: Option<NaiveDate>,
    pub page: Option<i64>,
}

impl TimeEntriesFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }
}

impl HarvestFilter for TimeEntriesFilter {
    fn as_query(&self) -> String {
        let mut parts = Vec::new();
        if let Some(user_id) = self.user_id {
            parts.push(format!("user_id={}", user_id));
        }
        if let Some(to) = self.to {
            parts.push(format!("to={}", to.format("%Y-%m-%d")));
        }
        if let Some(page) = self.page {
            parts.push(format!("page={}", page));
        }
        parts.join("&")
    }
}
