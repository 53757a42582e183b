use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::{
    domain::{Assignment, AssignmentsFilter, CurrentUser, Person, Project},
    ForecastUrl,
};

use super::Credentials;

const USER_AGENT: &str = concat!("timetracking/", env!("CARGO_PKG_VERSION"));

pub struct ForecastClient {
    credentials: Credentials,
}

impl ForecastClient {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, ForecastError> {
        let client = reqwest::Client::new();

        let resp = client
            .get(url.as_ref())
            .header("Authorization", self.credentials.bearer_header())
            .header("Forecast-Account-Id", self.credentials.account_header())
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| ForecastError::Response(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(ForecastError::Unauthorized);
        }

        let resp_data = resp
            .json::<T>()
            .await
            .map_err(|e| ForecastError::Parsing(format!("failed to parse response as JSON: {}", e)))?;

        Ok(resp_data)
    }

    /// The person the token authenticates as, id only.
    pub async fn get_me(&self) -> Result<CurrentUser, ForecastError> {
        let url = ForecastUrl::new().append_path("/whoami");
        let response: WhoamiResponse = self.fetch(url).await?;
        Ok(response.current_user)
    }

    pub async fn get_person(&self, id: i64) -> Result<Person, ForecastError> {
        let url = ForecastUrl::new().append_path(&format!("/people/{}", id));
        let response: PersonResponse = self.fetch(url).await?;
        Ok(response.person)
    }

    pub async fn get_projects(&self) -> Result<Vec<Project>, ForecastError> {
        let url = ForecastUrl::new().append_path("/projects");
        let response: ProjectsResponse = self.fetch(url).await?;
        Ok(response.projects)
    }

    pub async fn get_assignments(
        &self,
        filter: &AssignmentsFilter,
    ) -> Result<Vec<Assignment>, ForecastError> {
        let url = ForecastUrl::new()
            .append_path("/assignments")
            .with_filter(filter);
        let response: AssignmentsResponse = self.fetch(url).await?;
        Ok(response.assignments)
    }
}

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("response error: {0}")]
    Response(String),
    #[error("parsing error: {0}")]
    Parsing(String),
}

// Forecast wraps every payload in a single-key envelope.

#[derive(Debug, Deserialize)]
struct WhoamiResponse {
    current_user: CurrentUser,
}

#[derive(Debug, Deserialize)]
struct PersonResponse {
    person: Person,
}

#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct AssignmentsResponse {
    assignments: Vec<Assignment>,
}
