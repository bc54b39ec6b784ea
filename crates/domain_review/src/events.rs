//! Domain events for review schedules
//!
//! Events are handed to the [`ReviewEventPublisher`](crate::ports::ReviewEventPublisher)
//! port after each state change has been persisted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{EventId, PrisonNumber, ReviewScheduleId};
use crate::rule::ReviewScheduleCalculationRule;
use crate::schedule::ReviewSchedule;
use crate::status::ReviewScheduleStatus;

/// Events emitted by the review schedule service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReviewScheduleEvent {
    /// A new schedule has been created
    ReviewScheduleCreated {
        event_id: EventId,
        reference: ReviewScheduleId,
        prison_number: PrisonNumber,
        calculation_rule: ReviewScheduleCalculationRule,
        earliest_review_date: NaiveDate,
        latest_review_date: NaiveDate,
        timestamp: DateTime<Utc>,
    },

    /// A schedule was put into, or taken out of, an exemption
    ReviewScheduleStatusUpdated {
        event_id: EventId,
        reference: ReviewScheduleId,
        prison_number: PrisonNumber,
        old_status: ReviewScheduleStatus,
        new_status: ReviewScheduleStatus,
        old_latest_review_date: NaiveDate,
        new_latest_review_date: NaiveDate,
        exemption_reason: Option<String>,
        timestamp: DateTime<Utc>,
    },

    /// The review for a schedule has been carried out
    ReviewCompleted {
        event_id: EventId,
        reference: ReviewScheduleId,
        prison_number: PrisonNumber,
        timestamp: DateTime<Utc>,
    },
}

impl ReviewScheduleEvent {
    pub fn schedule_created(schedule: &ReviewSchedule) -> Self {
        ReviewScheduleEvent::ReviewScheduleCreated {
            event_id: EventId::new(),
            reference: schedule.reference,
            prison_number: schedule.prison_number.clone(),
            calculation_rule: schedule.schedule_calculation_rule,
            earliest_review_date: schedule.earliest_review_date,
            latest_review_date: schedule.latest_review_date,
            timestamp: Utc::now(),
        }
    }

    pub fn status_updated(previous: &ReviewSchedule, updated: &ReviewSchedule) -> Self {
        ReviewScheduleEvent::ReviewScheduleStatusUpdated {
            event_id: EventId::new(),
            reference: updated.reference,
            prison_number: updated.prison_number.clone(),
            old_status: previous.schedule_status,
            new_status: updated.schedule_status,
            old_latest_review_date: previous.latest_review_date,
            new_latest_review_date: updated.latest_review_date,
            exemption_reason: updated.exemption_reason.clone(),
            timestamp: Utc::now(),
        }
    }

    pub fn review_completed(schedule: &ReviewSchedule) -> Self {
        ReviewScheduleEvent::ReviewCompleted {
            event_id: EventId::new(),
            reference: schedule.reference,
            prison_number: schedule.prison_number.clone(),
            timestamp: Utc::now(),
        }
    }

    /// Returns the prison number associated with this event
    pub fn prison_number(&self) -> &PrisonNumber {
        match self {
            ReviewScheduleEvent::ReviewScheduleCreated { prison_number, .. } => prison_number,
            ReviewScheduleEvent::ReviewScheduleStatusUpdated { prison_number, .. } => prison_number,
            ReviewScheduleEvent::ReviewCompleted { prison_number, .. } => prison_number,
        }
    }

    /// Returns the schedule reference associated with this event
    pub fn reference(&self) -> ReviewScheduleId {
        match self {
            ReviewScheduleEvent::ReviewScheduleCreated { reference, .. } => *reference,
            ReviewScheduleEvent::ReviewScheduleStatusUpdated { reference, .. } => *reference,
            ReviewScheduleEvent::ReviewCompleted { reference, .. } => *reference,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ReviewScheduleEvent::ReviewScheduleCreated { .. } => "ReviewScheduleCreated",
            ReviewScheduleEvent::ReviewScheduleStatusUpdated { .. } => "ReviewScheduleStatusUpdated",
            ReviewScheduleEvent::ReviewCompleted { .. } => "ReviewCompleted",
        }
    }
}
