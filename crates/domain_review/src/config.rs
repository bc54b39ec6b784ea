//! Review calculation configuration
//!
//! # Environment Variables
//!
//! * `REVIEW_EARLIEST_REVIEW_CALCULATION_DATE` - ISO date used instead of today
//!   for every calculation (default: unset)
//! * `REVIEW_MISSING_RELEASE_DATE_POLICY` - `default_to_indeterminate` or
//!   `reject_sentenced` (default: `default_to_indeterminate`)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ReviewScheduleError;

/// What to do with a SENTENCED or RECALL prisoner that has no release date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReleaseDatePolicy {
    /// Schedule the prisoner as if on an indeterminate sentence
    #[default]
    DefaultToIndeterminate,
    /// Refuse to create a schedule
    RejectSentenced,
}

/// Review calculation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewCalculationConfig {
    /// Replaces "today" in every calculation when set
    #[serde(default)]
    pub earliest_review_calculation_date: Option<NaiveDate>,
    #[serde(default)]
    pub missing_release_date_policy: MissingReleaseDatePolicy,
}

impl ReviewCalculationConfig {
    /// Loads configuration from `REVIEW_*` environment variables
    ///
    /// Unreadable values are reported as `ReviewScheduleError::Configuration`
    pub fn from_env() -> Result<Self, ReviewScheduleError> {
        Self::from_environment(config::Environment::with_prefix("REVIEW"))
    }

    /// Loads a `.env` file if present, then reads the environment
    pub fn load() -> Result<Self, ReviewScheduleError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Reads configuration from an explicit set of variables instead of the
    /// process environment
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ReviewScheduleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_environment(config::Environment::with_prefix("REVIEW").source(Some(source)))
    }

    fn from_environment(environment: config::Environment) -> Result<Self, ReviewScheduleError> {
        let settings = config::Config::builder()
            .add_source(environment)
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
