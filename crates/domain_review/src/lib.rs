//! Review Scheduling Domain
//!
//! This crate decides when a prisoner's next education and work plan review
//! is due, and manages the lifecycle of the resulting review schedule.
//!
//! # Architecture
//!
//! - **Calculator**: a pure rules engine turning sentence data into a
//!   calculation rule and a review window, and adjusting due dates when an
//!   exemption is lifted
//! - **Status model**: schedule statuses and the allow-list of legal transitions
//! - **Service**: orchestrates schedule creation, status changes and review
//!   completion against persistence and event publishing ports
//!
//! # Schedule Lifecycle
//!
//! ```text
//! SCHEDULED -> EXEMPT_* -> SCHEDULED
//!           \-> COMPLETED (review done, next schedule created)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_review::{ReviewWindowCalculator, SentenceType};
//!
//! let calculator = ReviewWindowCalculator::new(None);
//! let rule = calculator.determine_review_schedule_calculation_rule(
//!     None, SentenceType::Sentenced, Some(release_date), false, false,
//! );
//! let window = calculator.calculate_review_window(rule, Some(release_date));
//! ```

pub mod sentence;
pub mod rule;
pub mod status;
pub mod transition;
pub mod calculator;
pub mod schedule;
pub mod events;
pub mod ports;
pub mod services;
pub mod config;
pub mod error;

pub use sentence::{SentenceType, SentenceDetails};
pub use rule::ReviewScheduleCalculationRule;
pub use status::{ReviewScheduleStatus, ExemptionClass};
pub use transition::ReviewScheduleStatusTransitionValidator;
pub use calculator::{ReviewWindowCalculator, ReviewScheduleWindow};
pub use schedule::ReviewSchedule;
pub use events::ReviewScheduleEvent;
pub use ports::{ReviewSchedulePort, ReviewEventPublisher, ReviewScheduleStatusUpdate};
pub use services::{
    ReviewScheduleService, CreateInitialReviewScheduleRequest,
    UpdateReviewScheduleStatusRequest, CompleteReviewRequest,
};
pub use crate::config::{ReviewCalculationConfig, MissingReleaseDatePolicy};
pub use error::ReviewScheduleError;
