use std::env;

use crate::domain::HarvestFilter;

const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com/v2";

#[derive(Debug)]
pub struct HarvestUrl(String);

impl AsRef<str> for HarvestUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl HarvestUrl {
    /// Base URL of the Harvest v2 API, overridable through `HARVEST_API_URL`.
    pub fn new() -> Self {
        Self(env::var("HARVEST_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    pub fn with_filter(&self, filter: &impl HarvestFilter) -> Self {
        let query = filter.as_query();
        if query.is_empty() {
            return Self(self.0.clone());
        }

        if self.0.contains('?') {
            Self(format!("{}&{}", self.0, query))
        } else {
            Self(format!("{}?{}", self.0, query))
        }
    }
}
