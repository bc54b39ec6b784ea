//! Review schedule domain services
//!
//! [`ReviewScheduleService`] owns the schedule lifecycle. It validates
//! preconditions, runs the calculator, persists through
//! [`ReviewSchedulePort`] and announces every change through
//! [`ReviewEventPublisher`].
//!
//! Storage is the source of truth. Events are published only after the
//! change they describe has been saved, and a failed publish is logged
//! rather than reported to the caller, who would otherwise retry a change
//! that already happened.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use core_kernel::PrisonNumber;
use crate::calculator::ReviewWindowCalculator;
use crate::config::MissingReleaseDatePolicy;
use crate::error::ReviewScheduleError;
use crate::events::ReviewScheduleEvent;
use crate::ports::{ReviewEventPublisher, ReviewSchedulePort, ReviewScheduleStatusUpdate};
use crate::schedule::ReviewSchedule;
use crate::sentence::SentenceDetails;
use crate::status::ReviewScheduleStatus;
use crate::transition::ReviewScheduleStatusTransitionValidator;

/// Request to create a prisoner's first review schedule
#[derive(Debug, Clone)]
pub struct CreateInitialReviewScheduleRequest {
    pub prison_number: PrisonNumber,
    pub sentence: SentenceDetails,
}

/// Request to put a schedule into, or take it out of, an exemption
#[derive(Debug, Clone)]
pub struct UpdateReviewScheduleStatusRequest {
    pub prison_number: PrisonNumber,
    pub status: ReviewScheduleStatus,
    pub exemption_reason: Option<String>,
}

/// Request to record that a review took place
#[derive(Debug, Clone)]
pub struct CompleteReviewRequest {
    pub prison_number: PrisonNumber,
    /// Sentence data the next schedule is calculated from
    pub sentence: SentenceDetails,
}

/// Service managing review schedules
pub struct ReviewScheduleService {
    schedules: Arc<dyn ReviewSchedulePort>,
    events: Arc<dyn ReviewEventPublisher>,
    calculator: ReviewWindowCalculator,
    transitions: ReviewScheduleStatusTransitionValidator,
    missing_release_date_policy: MissingReleaseDatePolicy,
}

impl ReviewScheduleService {
    /// Creates a new review schedule service
    ///
    /// # Arguments
    ///
    /// * `schedules` - persistence adapter
    /// * `events` - event publishing adapter
    /// * `calculator` - calculator, already anchored
    /// * `missing_release_date_policy` - how to treat SENTENCED/RECALL prisoners with no release date
    pub fn new(
        schedules: Arc<dyn ReviewSchedulePort>,
        events: Arc<dyn ReviewEventPublisher>,
        calculator: ReviewWindowCalculator,
        missing_release_date_policy: MissingReleaseDatePolicy,
    ) -> Self {
        Self {
            schedules,
            events,
            calculator,
            transitions: ReviewScheduleStatusTransitionValidator::new(),
            missing_release_date_policy,
        }
    }

    /// Returns the prisoner's active schedule
    ///
    /// # Errors
    ///
    /// Returns `ActiveReviewScheduleNotFound` when the prisoner has none
    pub async fn get_active_review_schedule(
        &self,
        prison_number: &PrisonNumber,
    ) -> Result<ReviewSchedule, ReviewScheduleError> {
        self.schedules
            .get_active_review_schedule(prison_number)
            .await?
            .ok_or_else(|| ReviewScheduleError::not_found(prison_number))
    }

    /// Creates the prisoner's initial review schedule
    ///
    /// Returns `Ok(None)` when the prisoner is within three months of release:
    /// no review is required and nothing is stored.
    ///
    /// # Errors
    ///
    /// - `ActiveReviewScheduleExists` if the prisoner already has an active schedule
    /// - `UnsupportedSentenceConfiguration` if the missing release date policy rejects the sentence
    /// - `Port` if persistence fails
    #[instrument(skip(self, request), fields(prison_number = %request.prison_number))]
    pub async fn create_initial_review_schedule(
        &self,
        request: CreateInitialReviewScheduleRequest,
    ) -> Result<Option<ReviewSchedule>, ReviewScheduleError> {
        let prison_number = request.prison_number;

        if self.schedules.get_active_review_schedule(&prison_number).await?.is_some() {
            warn!("Prisoner already has an active review schedule");
            return Err(ReviewScheduleError::ActiveReviewScheduleExists(prison_number));
        }

        match self.plan_schedule(&prison_number, &request.sentence)? {
            Some(schedule) => {
                self.schedules.create_review_schedule(&schedule).await?;
                self.announce_created(&schedule).await;
                Ok(Some(schedule))
            }
            None => Ok(None),
        }
    }

    /// Moves the active schedule into or out of an exemption
    ///
    /// Leaving an exemption recalculates the due date with
    /// [`ReviewWindowCalculator::calculate_adjusted_review_due_date`]. The
    /// adjustment only ever moves the due date later, so the earliest review
    /// date is kept.
    ///
    /// # Errors
    ///
    /// - `ActiveReviewScheduleNotFound` if the prisoner has no active schedule
    /// - `InvalidStatusTransition` if the move is not allowed
    /// - `Port` if persistence fails
    #[instrument(skip(self, request), fields(prison_number = %request.prison_number, status = %request.status))]
    pub async fn update_review_schedule_status(
        &self,
        request: UpdateReviewScheduleStatusRequest,
    ) -> Result<ReviewSchedule, ReviewScheduleError> {
        let active = self.get_active_review_schedule(&request.prison_number).await?;

        if let Err(e) = self.transitions.validate(
            &request.prison_number,
            active.schedule_status,
            request.status,
        ) {
            warn!(from = %active.schedule_status, "Rejected review schedule status update");
            return Err(e);
        }

        let update = if request.status.is_exemption() {
            ReviewScheduleStatusUpdate {
                reference: active.reference,
                prison_number: active.prison_number.clone(),
                status: request.status,
                exemption_reason: request.exemption_reason,
                earliest_review_date: active.earliest_review_date,
                latest_review_date: active.latest_review_date,
            }
        } else {
            let latest_review_date = self.calculator.calculate_adjusted_review_due_date(&active);
            ReviewScheduleStatusUpdate {
                reference: active.reference,
                prison_number: active.prison_number.clone(),
                status: request.status,
                exemption_reason: None,
                earliest_review_date: active.earliest_review_date,
                latest_review_date,
            }
        };

        let updated = self.schedules.update_review_schedule_status(&update).await?;
        self.publish(&ReviewScheduleEvent::status_updated(&active, &updated))
            .await;

        info!(
            from = %active.schedule_status,
            latest_review_date = %updated.latest_review_date,
            "Review schedule status updated"
        );
        Ok(updated)
    }

    /// Marks the active schedule COMPLETED and creates the next one
    ///
    /// Returns the next schedule, or `None` if the prisoner no longer needs
    /// a review. The next schedule is worked out before anything is saved.
    /// If it cannot be stored, the completed schedule is put back as it was
    /// so the prisoner is never left without an active schedule.
    ///
    /// # Errors
    ///
    /// - `ActiveReviewScheduleNotFound` if the prisoner has no active schedule
    /// - `InvalidStatusTransition` if the active schedule is exempt
    /// - `UnsupportedSentenceConfiguration` if the missing release date policy rejects the sentence
    /// - `Port` if persistence fails
    #[instrument(skip(self, request), fields(prison_number = %request.prison_number))]
    pub async fn complete_review(
        &self,
        request: CompleteReviewRequest,
    ) -> Result<Option<ReviewSchedule>, ReviewScheduleError> {
        let active = self.get_active_review_schedule(&request.prison_number).await?;

        if active.schedule_status != ReviewScheduleStatus::Scheduled {
            warn!(status = %active.schedule_status, "Cannot complete a review on an exempt schedule");
            return Err(ReviewScheduleError::invalid_transition(
                &request.prison_number,
                active.schedule_status,
                ReviewScheduleStatus::Completed,
            ));
        }

        let next = self.plan_schedule(&request.prison_number, &request.sentence)?;

        let mut completed = active.clone();
        completed.mark_completed();
        self.schedules.update_review_schedule(&completed).await?;

        if let Some(next) = &next {
            if let Err(e) = self.schedules.create_review_schedule(next).await {
                warn!(error = %e, reference = %active.reference, "Failed to store next review schedule, restoring completed schedule");
                if let Err(restore) = self.schedules.update_review_schedule(&active).await {
                    error!(error = %restore, reference = %active.reference, "Failed to restore review schedule");
                }
                return Err(e.into());
            }
        }

        info!(reference = %completed.reference, "Review completed");
        self.publish(&ReviewScheduleEvent::review_completed(&completed))
            .await;
        if let Some(next) = &next {
            self.announce_created(next).await;
        }
        Ok(next)
    }

    /// Works out the schedule a prisoner should get, without saving it
    ///
    /// The anchor date is read once so the rule and the window always come
    /// from the same day.
    fn plan_schedule(
        &self,
        prison_number: &PrisonNumber,
        sentence: &SentenceDetails,
    ) -> Result<Option<ReviewSchedule>, ReviewScheduleError> {
        self.check_missing_release_date(prison_number, sentence)?;

        let today = self.calculator.anchor_date();
        let rule = self.calculator.rule_at(
            today,
            Some(prison_number),
            sentence.sentence_type,
            sentence.release_date,
            sentence.is_readmission,
            sentence.is_transfer,
        );

        let Some(window) = self.calculator.review_window_at(today, rule, sentence.release_date) else {
            info!(rule = %rule, "No review required");
            return Ok(None);
        };

        Ok(Some(ReviewSchedule::new(prison_number.clone(), rule, window)))
    }

    async fn announce_created(&self, schedule: &ReviewSchedule) {
        info!(
            reference = %schedule.reference,
            rule = %schedule.schedule_calculation_rule,
            earliest_review_date = %schedule.earliest_review_date,
            latest_review_date = %schedule.latest_review_date,
            "Review schedule created"
        );
        self.publish(&ReviewScheduleEvent::schedule_created(schedule))
            .await;
    }

    async fn publish(&self, event: &ReviewScheduleEvent) {
        if let Err(e) = self.events.publish(event).await {
            warn!(
                error = %e,
                event_type = event.event_type(),
                reference = %event.reference(),
                "Failed to publish review schedule event"
            );
        }
    }

    fn check_missing_release_date(
        &self,
        prison_number: &PrisonNumber,
        sentence: &SentenceDetails,
    ) -> Result<(), ReviewScheduleError> {
        let rejected = self.missing_release_date_policy == MissingReleaseDatePolicy::RejectSentenced
            && sentence.release_date.is_none()
            && sentence.sentence_type.expects_release_date()
            && !sentence.is_transfer
            && !sentence.is_readmission;

        if rejected {
            warn!(sentence_type = %sentence.sentence_type, "Release date missing for sentenced prisoner");
            return Err(ReviewScheduleError::UnsupportedSentenceConfiguration {
                prison_number: prison_number.clone(),
                sentence_type: sentence.sentence_type,
            });
        }
        Ok(())
    }
}
