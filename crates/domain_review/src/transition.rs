//! Review schedule status transitions
//!
//! Legal moves are held as an explicit allow-list of `(from, to)` pairs:
//!
//! ```text
//! SCHEDULED  -> EXEMPT_*
//! EXEMPT_*   -> SCHEDULED
//! ```
//!
//! Everything else is rejected, including SCHEDULED -> SCHEDULED, moving
//! directly between two exemptions, and leaving COMPLETED. Completion is
//! recorded through the review completion route, never through a status update.

use std::collections::HashSet;

use core_kernel::PrisonNumber;
use crate::error::ReviewScheduleError;
use crate::status::ReviewScheduleStatus;

/// Validates status updates against the allow-list
#[derive(Debug, Clone)]
pub struct ReviewScheduleStatusTransitionValidator {
    allowed: HashSet<(ReviewScheduleStatus, ReviewScheduleStatus)>,
}

impl ReviewScheduleStatusTransitionValidator {
    pub fn new() -> Self {
        let allowed = ReviewScheduleStatus::ALL
            .into_iter()
            .filter(ReviewScheduleStatus::is_exemption)
            .flat_map(|exempt| {
                [
                    (ReviewScheduleStatus::Scheduled, exempt),
                    (exempt, ReviewScheduleStatus::Scheduled),
                ]
            })
            .collect();
        Self { allowed }
    }

    pub fn is_allowed(&self, from: ReviewScheduleStatus, to: ReviewScheduleStatus) -> bool {
        self.allowed.contains(&(from, to))
    }

    /// Fails with `InvalidStatusTransition` when the move is not in the allow-list
    pub fn validate(
        &self,
        prison_number: &PrisonNumber,
        from: ReviewScheduleStatus,
        to: ReviewScheduleStatus,
    ) -> Result<(), ReviewScheduleError> {
        if self.is_allowed(from, to) {
            Ok(())
        } else {
            Err(ReviewScheduleError::invalid_transition(prison_number, from, to))
        }
    }

    /// Every allowed pair, in no particular order
    pub fn allowed_transitions(&self) -> impl Iterator<Item = &(ReviewScheduleStatus, ReviewScheduleStatus)> {
        self.allowed.iter()
    }
}

impl Default for ReviewScheduleStatusTransitionValidator {
    fn default() -> Self {
        Self::new()
    }
}
