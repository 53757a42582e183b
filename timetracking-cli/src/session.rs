use std::collections::HashMap;

use chrono::NaiveDate;
use forecast::{
    domain::{Assignment, AssignmentsFilter, Person},
    ForecastClient, ForecastError,
};
use harvest::{
    domain::{TimeEntry, User},
    HarvestClient, HarvestError,
};
use thiserror::Error;
use tracing::instrument;

use crate::{
    calendar::WorkCalendar,
    grouping::{group_entries, Granularity},
    tracking::collect_recent_days,
};

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error(transparent)]
    Harvest(#[from] HarvestError),
    #[error(transparent)]
    Forecast(#[from] ForecastError),
    #[error("no user bound to the session")]
    NoUser,
    #[error("no forecast user bound to the session")]
    NoForecastUser,
    #[error("forecast_account_id is not configured")]
    ForecastNotConfigured,
    #[error("no project named '{0}' in the forecast account")]
    ProjectNotFound(String),
}

/// Binds the validated calendar and the authenticated identities on both
/// accounts, and exposes the reporting entry points the CLI calls.
pub struct Timetracking {
    calendar: WorkCalendar,
    harvest: HarvestClient,
    forecast: Option<ForecastClient>,
    user: Option<User>,
    forecast_user: Option<Person>,
}

impl Timetracking {
    pub fn new(
        calendar: WorkCalendar,
        harvest: HarvestClient,
        forecast: Option<ForecastClient>,
    ) -> Self {
        Self {
            calendar,
            harvest,
            forecast,
            user: None,
            forecast_user: None,
        }
    }

    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn forecast_user(&self) -> Option<&Person> {
        self.forecast_user.as_ref()
    }

    /// Resolve and bind the Harvest user: the token's own user, or an
    /// explicit id.
    #[instrument(name = "set_user", skip(self))]
    pub async fn set_user(&mut self, uid: Option<i64>) -> Result<(), TrackingError> {
        self.user = None;
        let user = match uid {
            None => self.harvest.get_me().await?,
            Some(id) => self.harvest.get_user(id).await?,
        };
        tracing::debug!(user_id = user.id, "bound harvest user");
        self.user = Some(user);
        Ok(())
    }

    /// Resolve and bind the Forecast person, going through `/whoami` when
    /// no explicit id is given.
    #[instrument(name = "set_forecast_user", skip(self))]
    pub async fn set_forecast_user(&mut self, uid: Option<i64>) -> Result<(), TrackingError> {
        self.forecast_user = None;
        let client = self
            .forecast
            .as_ref()
            .ok_or(TrackingError::ForecastNotConfigured)?;

        let id = match uid {
            None => client.get_me().await?.id,
            Some(id) => id,
        };
        let person = client.get_person(id).await?;
        tracing::debug!(person_id = person.id, "bound forecast user");
        self.forecast_user = Some(person);
        Ok(())
    }

    /// The `amount` most recent workdays of tracked time, counted
    /// backward from `from`.
    #[instrument(name = "get_recent_days", skip(self))]
    pub async fn get_recent_days(
        &self,
        amount: usize,
        from: NaiveDate,
        include_empty_days: bool,
    ) -> Result<(usize, Vec<TimeEntry>), TrackingError> {
        let user = self.user.as_ref().ok_or(TrackingError::NoUser)?;
        let (days, entries) = collect_recent_days(
            &self.harvest,
            &self.calendar,
            user.id,
            amount,
            from,
            include_empty_days,
        )
        .await?;
        Ok((days, entries))
    }

    /// Same window as [`get_recent_days`], re-keyed into calendar buckets.
    ///
    /// [`get_recent_days`]: Self::get_recent_days
    #[instrument(name = "get_recent_days_grouped", skip(self))]
    pub async fn get_recent_days_grouped(
        &self,
        amount: usize,
        from: NaiveDate,
        include_empty_days: bool,
        granularity: Granularity,
    ) -> Result<(usize, HashMap<String, Vec<TimeEntry>>), TrackingError> {
        let (days, entries) = self
            .get_recent_days(amount, from, include_empty_days)
            .await?;
        let (_, groups) = group_entries(&self.calendar, entries, granularity);
        Ok((days, groups))
    }

    /// Resolve a Forecast project by name and list the bound person's
    /// assignments on it.
    #[instrument(name = "assignments_by_name", skip(self))]
    pub async fn assignments_by_name(
        &self,
        project_name: &str,
    ) -> Result<Vec<Assignment>, TrackingError> {
        let client = self
            .forecast
            .as_ref()
            .ok_or(TrackingError::ForecastNotConfigured)?;
        let person = self
            .forecast_user
            .as_ref()
            .ok_or(TrackingError::NoForecastUser)?;

        let projects = client.get_projects().await?;
        let project = projects
            .into_iter()
            .find(|p| p.name == project_name)
            .ok_or_else(|| TrackingError::ProjectNotFound(project_name.to_string()))?;

        let filter = AssignmentsFilter::new()
            .project_id(project.id)
            .person_id(person.id);
        Ok(client.get_assignments(&filter).await?)
    }
}
