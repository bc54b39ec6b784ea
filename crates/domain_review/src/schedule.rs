//! Review schedule entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{PrisonNumber, ReviewScheduleId};
use crate::calculator::ReviewScheduleWindow;
use crate::rule::ReviewScheduleCalculationRule;
use crate::status::ReviewScheduleStatus;

/// A prisoner's review schedule
///
/// Only one schedule per prisoner is active at a time; completed schedules
/// are kept as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSchedule {
    /// Unique reference
    pub reference: ReviewScheduleId,
    /// Prisoner the schedule belongs to
    pub prison_number: PrisonNumber,
    /// Start of the review window
    pub earliest_review_date: NaiveDate,
    /// End of the review window; the date the review is due by
    pub latest_review_date: NaiveDate,
    /// Rule the window was derived from
    pub schedule_calculation_rule: ReviewScheduleCalculationRule,
    pub schedule_status: ReviewScheduleStatus,
    /// Free text explaining an EXEMPT_* status
    pub exemption_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReviewSchedule {
    /// Creates a new SCHEDULED review schedule covering the window
    pub fn new(
        prison_number: PrisonNumber,
        rule: ReviewScheduleCalculationRule,
        window: ReviewScheduleWindow,
    ) -> Self {
        let now = Utc::now();
        Self {
            reference: ReviewScheduleId::new(),
            prison_number,
            earliest_review_date: window.date_from,
            latest_review_date: window.date_to,
            schedule_calculation_rule: rule,
            schedule_status: ReviewScheduleStatus::Scheduled,
            exemption_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Anything but COMPLETED is active
    pub fn is_active(&self) -> bool {
        self.schedule_status != ReviewScheduleStatus::Completed
    }

    pub fn mark_completed(&mut self) {
        self.schedule_status = ReviewScheduleStatus::Completed;
        self.exemption_reason = None;
        self.updated_at = Utc::now();
    }
}
