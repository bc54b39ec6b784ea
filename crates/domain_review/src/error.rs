//! Review scheduling domain errors

use thiserror::Error;

use core_kernel::{CoreError, PortError, PrisonNumber};
use crate::sentence::SentenceType;
use crate::status::ReviewScheduleStatus;

/// Errors raised while orchestrating review schedules
///
/// The calculator itself never fails; these come from the checks made
/// before and after it runs.
#[derive(Debug, Error)]
pub enum ReviewScheduleError {
    #[error("Review schedule status transition from {from} to {to} is not allowed for prisoner [{prison_number}]")]
    InvalidStatusTransition {
        prison_number: PrisonNumber,
        from: ReviewScheduleStatus,
        to: ReviewScheduleStatus,
    },

    #[error("Sentence type {sentence_type} without a release date is not supported for prisoner [{prison_number}]")]
    UnsupportedSentenceConfiguration {
        prison_number: PrisonNumber,
        sentence_type: SentenceType,
    },

    #[error("Active review schedule not found for prisoner [{0}]")]
    ActiveReviewScheduleNotFound(PrisonNumber),

    #[error("Active review schedule already exists for prisoner [{0}]")]
    ActiveReviewScheduleExists(PrisonNumber),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Port error: {0}")]
    Port(#[from] PortError),
}

impl From<config::ConfigError> for ReviewScheduleError {
    fn from(e: config::ConfigError) -> Self {
        ReviewScheduleError::Configuration(e.to_string())
    }
}

impl ReviewScheduleError {
    pub fn not_found(prison_number: &PrisonNumber) -> Self {
        ReviewScheduleError::ActiveReviewScheduleNotFound(prison_number.clone())
    }

    pub fn invalid_transition(
        prison_number: &PrisonNumber,
        from: ReviewScheduleStatus,
        to: ReviewScheduleStatus,
    ) -> Self {
        ReviewScheduleError::InvalidStatusTransition {
            prison_number: prison_number.clone(),
            from,
            to,
        }
    }

    /// Returns true for errors a caller would surface as "not found"
    pub fn is_not_found(&self) -> bool {
        match self {
            ReviewScheduleError::ActiveReviewScheduleNotFound(_) => true,
            ReviewScheduleError::Port(e) => e.is_not_found(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_prison_number_converts_to_core_error() {
        let err: ReviewScheduleError = PrisonNumber::new("12345").unwrap_err().into();
        assert!(matches!(err, ReviewScheduleError::Core(CoreError::Validation(_))));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_config_error_converts_to_configuration() {
        let err: ReviewScheduleError = config::ConfigError::NotFound("missing".to_string()).into();
        assert!(matches!(err, ReviewScheduleError::Configuration(_)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_port_not_found_is_not_found() {
        let err: ReviewScheduleError = PortError::not_found("ReviewSchedule", "RVS-1").into();
        assert!(err.is_not_found());
    }
}
