//! Test Data Builders
//!
//! Builders let tests specify only the fields they care about.

use chrono::NaiveDate;
use core_kernel::PrisonNumber;
use domain_review::{
    ReviewSchedule, ReviewScheduleCalculationRule, ReviewScheduleStatus, ReviewScheduleWindow,
};

use crate::fixtures::{PrisonNumberFixtures, TemporalFixtures};

/// Builder for review schedules
pub struct ReviewScheduleBuilder {
    prison_number: PrisonNumber,
    rule: ReviewScheduleCalculationRule,
    earliest_review_date: NaiveDate,
    latest_review_date: NaiveDate,
    status: ReviewScheduleStatus,
    exemption_reason: Option<String>,
}

impl Default for ReviewScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewScheduleBuilder {
    /// Creates a builder for a SCHEDULED 6-12 month schedule
    pub fn new() -> Self {
        let today = TemporalFixtures::today();
        Self {
            prison_number: PrisonNumberFixtures::a1234bc(),
            rule: ReviewScheduleCalculationRule::Between6And12MonthsToServe,
            earliest_review_date: today,
            latest_review_date: today + chrono::Days::new(30),
            status: ReviewScheduleStatus::Scheduled,
            exemption_reason: None,
        }
    }

    pub fn with_prison_number(mut self, prison_number: PrisonNumber) -> Self {
        self.prison_number = prison_number;
        self
    }

    pub fn with_rule(mut self, rule: ReviewScheduleCalculationRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_earliest_review_date(mut self, date: NaiveDate) -> Self {
        self.earliest_review_date = date;
        self
    }

    pub fn with_latest_review_date(mut self, date: NaiveDate) -> Self {
        self.latest_review_date = date;
        self
    }

    pub fn with_status(mut self, status: ReviewScheduleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_exemption_reason(mut self, reason: impl Into<String>) -> Self {
        self.exemption_reason = Some(reason.into());
        self
    }

    /// Builds the schedule
    ///
    /// # Panics
    ///
    /// Panics if the earliest date is after the latest date
    pub fn build(self) -> ReviewSchedule {
        let window = ReviewScheduleWindow::new(self.earliest_review_date, self.latest_review_date)
            .expect("earliest review date must not be after latest review date");
        let mut schedule = ReviewSchedule::new(self.prison_number, self.rule, window);
        schedule.schedule_status = self.status;
        schedule.exemption_reason = self.exemption_reason;
        schedule
    }
}
