//! Review window calculation
//!
//! The calculator is a deterministic decision table over calendar dates:
//!
//! 1. sentence data + flags -> [`ReviewScheduleCalculationRule`]
//! 2. rule (+ release date) -> optional [`ReviewScheduleWindow`]
//! 3. existing schedule + its exemption status -> adjusted due date
//!
//! Every relative date is computed from the *anchor date*: today according to
//! the injected [`Clock`], or the configured earliest calculation date when one
//! is set. Month arithmetic is calendar based, so adding a month to Jan 31
//! lands on the last day of February.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::temporal::{minus_days, plus_days, plus_months};
use core_kernel::{Clock, DateRange, PrisonNumber, SystemClock, TemporalError};

use crate::config::ReviewCalculationConfig;
use crate::rule::ReviewScheduleCalculationRule;
use crate::schedule::ReviewSchedule;
use crate::sentence::SentenceType;

/// Inclusive window in which a review should take place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewScheduleWindow {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl ReviewScheduleWindow {
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> Result<Self, TemporalError> {
        let range = DateRange::new(date_from, date_to)?;
        Ok(Self::from(range))
    }

    /// Builds a window, pulling `date_to` up to `date_from` if it would precede it
    fn clamped(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        if date_to < date_from {
            debug!(%date_from, %date_to, "Review window end precedes its start, raising end to start");
        }
        Self {
            date_from,
            date_to: date_to.max(date_from),
        }
    }
}

impl From<DateRange> for ReviewScheduleWindow {
    fn from(range: DateRange) -> Self {
        Self {
            date_from: range.start,
            date_to: range.end,
        }
    }
}

/// Computes calculation rules, review windows and adjusted due dates
///
/// Holds no mutable state, so a single instance can be shared between
/// threads and services.
#[derive(Debug, Clone)]
pub struct ReviewWindowCalculator {
    clock: Arc<dyn Clock>,
    earliest_calculation_date: Option<NaiveDate>,
}

impl ReviewWindowCalculator {
    /// Creates a calculator anchored on the system clock
    ///
    /// # Arguments
    ///
    /// * `earliest_calculation_date` - when set, replaces "today" in every calculation
    pub fn new(earliest_calculation_date: Option<NaiveDate>) -> Self {
        Self::with_clock(Arc::new(SystemClock), earliest_calculation_date)
    }

    /// Creates a calculator reading "today" from the given clock
    pub fn with_clock(clock: Arc<dyn Clock>, earliest_calculation_date: Option<NaiveDate>) -> Self {
        Self {
            clock,
            earliest_calculation_date,
        }
    }

    /// Creates a calculator from loaded configuration, using the system clock
    pub fn from_config(config: &ReviewCalculationConfig) -> Self {
        Self::new(config.earliest_review_calculation_date)
    }

    /// The date all relative calculations start from
    pub fn anchor_date(&self) -> NaiveDate {
        self.earliest_calculation_date
            .unwrap_or_else(|| self.clock.today())
    }

    /// Determines which calculation rule applies
    ///
    /// Precedence (first match wins): transfer, readmission, then the
    /// sentence types that legitimately have no release date, then any other
    /// missing release date (treated as indeterminate), and finally banding on
    /// the time left to serve.
    ///
    /// # Arguments
    ///
    /// * `prison_number` - only used as log context
    /// * `sentence_type` - the prisoner's legal status
    /// * `release_date` - the prisoner's release date, if known
    /// * `is_readmission` - the prisoner has been readmitted to custody
    /// * `is_transfer` - the prisoner has arrived from another prison
    pub fn determine_review_schedule_calculation_rule(
        &self,
        prison_number: Option<&PrisonNumber>,
        sentence_type: SentenceType,
        release_date: Option<NaiveDate>,
        is_readmission: bool,
        is_transfer: bool,
    ) -> ReviewScheduleCalculationRule {
        self.rule_at(
            self.anchor_date(),
            prison_number,
            sentence_type,
            release_date,
            is_readmission,
            is_transfer,
        )
    }

    /// Rule determination against an anchor date the caller has already read
    pub(crate) fn rule_at(
        &self,
        today: NaiveDate,
        prison_number: Option<&PrisonNumber>,
        sentence_type: SentenceType,
        release_date: Option<NaiveDate>,
        is_readmission: bool,
        is_transfer: bool,
    ) -> ReviewScheduleCalculationRule {
        use ReviewScheduleCalculationRule::*;

        let rule = match (release_date, sentence_type) {
            _ if is_transfer => PrisonerTransfer,
            _ if is_readmission => PrisonerReadmission,
            (None, SentenceType::Remand) => PrisonerOnRemand,
            (None, SentenceType::ConvictedUnsentenced) => PrisonerUnSentenced,
            (None, _) => IndeterminateSentence,
            (Some(release_date), _) => time_to_serve_rule(today, release_date),
        };

        debug!(
            prison_number = prison_number.map(PrisonNumber::as_str),
            sentence_type = %sentence_type,
            ?release_date,
            is_readmission,
            is_transfer,
            rule = %rule,
            "Determined review schedule calculation rule"
        );
        rule
    }

    /// Calculates the review window for a rule
    ///
    /// Returns `None` for prisoners within three months of release, who do
    /// not need a review.
    pub fn calculate_review_window(
        &self,
        rule: ReviewScheduleCalculationRule,
        release_date: Option<NaiveDate>,
    ) -> Option<ReviewScheduleWindow> {
        self.review_window_at(self.anchor_date(), rule, release_date)
    }

    /// Window calculation against an anchor date the caller has already read
    pub(crate) fn review_window_at(
        &self,
        today: NaiveDate,
        rule: ReviewScheduleCalculationRule,
        release_date: Option<NaiveDate>,
    ) -> Option<ReviewScheduleWindow> {
        use ReviewScheduleCalculationRule::*;

        let months = |from: u32, to: u32| {
            ReviewScheduleWindow::clamped(plus_months(today, from), plus_months(today, to))
        };

        let window = match rule {
            PrisonerTransfer | PrisonerReadmission => {
                Some(ReviewScheduleWindow::clamped(today, plus_days(today, 10)))
            }
            BetweenReleaseAnd3MonthsToServe => None,
            Between3MonthsAnd3Months7DaysToServe => match release_date {
                Some(release_date) => Some(ReviewScheduleWindow::clamped(
                    plus_months(today, 1),
                    minus_days(release_date, 7),
                )),
                None => {
                    warn!(rule = %rule, "No release date supplied for release-dependent rule, using 1 to 3 months");
                    Some(months(1, 3))
                }
            },
            Between3Months8DaysAnd6MonthsToServe => Some(months(1, 3)),
            Between6And12MonthsToServe => Some(months(2, 3)),
            Between12And60MonthsToServe => Some(months(4, 6)),
            MoreThan60MonthsToServe => Some(months(10, 12)),
            PrisonerOnRemand | PrisonerUnSentenced => Some(months(2, 3)),
            IndeterminateSentence => Some(months(10, 12)),
        };

        debug!(rule = %rule, ?window, "Calculated review window");
        window
    }

    /// Calculates the due date for a schedule coming out of an exemption
    ///
    /// Exclusions push the latest review date to at least today + 10 days,
    /// other exemptions to at least today + 5 days. Any other status leaves
    /// the date untouched.
    pub fn calculate_adjusted_review_due_date(&self, schedule: &ReviewSchedule) -> NaiveDate {
        let latest_review_date = schedule.latest_review_date;

        match schedule.schedule_status.exemption_class() {
            Some(class) => {
                let floor = plus_days(self.anchor_date(), class.due_date_floor_days());
                latest_review_date.max(floor)
            }
            None => latest_review_date,
        }
    }
}

impl Default for ReviewWindowCalculator {
    fn default() -> Self {
        Self::new(None)
    }
}

fn time_to_serve_rule(today: NaiveDate, release_date: NaiveDate) -> ReviewScheduleCalculationRule {
    use ReviewScheduleCalculationRule::*;

    let three_months = plus_months(today, 3);

    if release_date <= three_months {
        BetweenReleaseAnd3MonthsToServe
    } else if release_date <= plus_days(three_months, 7) {
        Between3MonthsAnd3Months7DaysToServe
    } else if release_date <= plus_months(today, 6) {
        Between3Months8DaysAnd6MonthsToServe
    } else if release_date <= plus_months(today, 12) {
        Between6And12MonthsToServe
    } else if release_date <= plus_months(today, 60) {
        Between12And60MonthsToServe
    } else {
        MoreThan60MonthsToServe
    }
}
