use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    domain::{TimeEntriesFilter, TimeEntriesPage, User},
    HarvestUrl,
};

use super::Credentials;

const USER_AGENT: &str = concat!("timetracking/", env!("CARGO_PKG_VERSION"));

pub struct HarvestClient {
    credentials: Credentials,
}

impl HarvestClient {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, HarvestError> {
        let client = reqwest::Client::new();

        let resp = client
            .get(url.as_ref())
            .header("Authorization", self.credentials.bearer_header())
            .header("Harvest-Account-Id", self.credentials.account_header())
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| HarvestError::Response(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(HarvestError::Unauthorized);
        }

        let resp_data = resp
            .json::<T>()
            .await
            .map_err(|e| HarvestError::Parsing(format!("failed to parse response as JSON: {}", e)))?;

        Ok(resp_data)
    }

    /// The user the token authenticates as.
    pub async fn get_me(&self) -> Result<User, HarvestError> {
        let url = HarvestUrl::new().append_path("/users/me");
        self.fetch(url).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, HarvestError> {
        let url = HarvestUrl::new().append_path(&format!("/users/{}", id));
        self.fetch(url).await
    }

    /// One page of time entries matching the filter. Follow
    /// [`TimeEntriesPage::next_page`] for the rest.
    pub async fn get_time_entries(
        &self,
        filter: &TimeEntriesFilter,
    ) -> Result<TimeEntriesPage, HarvestError> {
        let url = HarvestUrl::new()
            .append_path("/time_entries")
            .with_filter(filter);
        self.fetch(url).await
    }
}

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("response error: {0}")]
    Response(String),
    #[error("parsing error: {0}")]
    Parsing(String),
}
