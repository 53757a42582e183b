use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarError, WorkCalendar};

const TEMPLATE: &str = r#"{
  "account_id": "your harvest account id",
  "forecast_account_id": "",
  "token": "your personal access token",
  "weekdays_off": ["saturday", "sunday"],
  "exclude_dates": []
}"#;

/// On-disk configuration: account credentials plus the off-day pattern.
/// Account ids are strings in the file; they are validated as numbers at
/// startup.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub account_id: String,
    #[serde(default)]
    pub forecast_account_id: String,
    pub token: String,
    #[serde(default)]
    pub weekdays_off: Vec<String>,
    #[serde(default)]
    pub exclude_dates: Vec<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("cannot determine config directory")?
            .join("timetracking")
            .join("config.json"))
    }

    /// Load the configuration, optionally from an explicit path. A missing
    /// file is reported together with a template to start from.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::path()?,
        };

        if !path.exists() {
            anyhow::bail!(
                "no config file at {}; create one like:\n{}",
                path.display(),
                TEMPLATE
            );
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn harvest_account_id(&self) -> Result<i64> {
        self.account_id
            .parse()
            .context("account_id should be a numeric value")
    }

    /// `None` when the field is empty or absent, which disables the
    /// forecast features.
    pub fn forecast_account_id(&self) -> Result<Option<i64>> {
        if self.forecast_account_id.is_empty() {
            return Ok(None);
        }
        self.forecast_account_id
            .parse()
            .map(Some)
            .context("forecast_account_id should be a numeric value or empty")
    }

    pub fn work_calendar(&self) -> Result<WorkCalendar, CalendarError> {
        WorkCalendar::new(&self.weekdays_off, &self.exclude_dates)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account_id", &self.account_id)
            .field("forecast_account_id", &self.forecast_account_id)
            .field("token", &"[REDACTED]")
            .field("weekdays_off", &self.weekdays_off)
            .field("exclude_dates", &self.exclude_dates)
            .finish()
    }
}
