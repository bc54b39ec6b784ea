//! Review Scheduling Ports
//!
//! The service reaches persistence and event publishing only through these
//! traits. Adapters may be backed by a database, a message queue, or memory
//! (see `test_utils::memory`).
//!
//! ```rust,ignore
//! let service = ReviewScheduleService::new(
//!     Arc::new(PostgresReviewScheduleAdapter::new(pool)),
//!     Arc::new(QueueEventPublisher::new(client)),
//!     ReviewWindowCalculator::from_config(&config),
//!     config.missing_release_date_policy,
//! );
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{DomainPort, PortError, PrisonNumber, ReviewScheduleId};
use crate::events::ReviewScheduleEvent;
use crate::schedule::ReviewSchedule;
use crate::status::ReviewScheduleStatus;

/// Field changes applied by a status update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewScheduleStatusUpdate {
    pub reference: ReviewScheduleId,
    pub prison_number: PrisonNumber,
    pub status: ReviewScheduleStatus,
    pub exemption_reason: Option<String>,
    pub earliest_review_date: NaiveDate,
    pub latest_review_date: NaiveDate,
}

/// Persistence port for review schedules
#[async_trait]
pub trait ReviewSchedulePort: DomainPort {
    /// Returns the prisoner's active (not COMPLETED) schedule, if any
    async fn get_active_review_schedule(
        &self,
        prison_number: &PrisonNumber,
    ) -> Result<Option<ReviewSchedule>, PortError>;

    /// Stores a new schedule
    async fn create_review_schedule(&self, schedule: &ReviewSchedule) -> Result<(), PortError>;

    /// Replaces an existing schedule
    ///
    /// # Errors
    ///
    /// Returns `PortError::NotFound` if no schedule has the same reference
    async fn update_review_schedule(&self, schedule: &ReviewSchedule) -> Result<(), PortError>;

    /// Applies a status update and returns the stored result
    ///
    /// # Errors
    ///
    /// Returns `PortError::NotFound` if no schedule has the reference
    async fn update_review_schedule_status(
        &self,
        update: &ReviewScheduleStatusUpdate,
    ) -> Result<ReviewSchedule, PortError>;
}

/// Outbound port for review schedule events
#[async_trait]
pub trait ReviewEventPublisher: DomainPort {
    async fn publish(&self, event: &ReviewScheduleEvent) -> Result<(), PortError>;
}
