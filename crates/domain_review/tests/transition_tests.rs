//! Tests for review schedule status transitions

use proptest::prelude::*;

use domain_review::{
    ReviewScheduleError, ReviewScheduleStatus as Status, ReviewScheduleStatusTransitionValidator,
};
use test_utils::{status_strategy, PrisonNumberFixtures};

fn exempt_statuses() -> impl Iterator<Item = Status> {
    Status::ALL.into_iter().filter(Status::is_exemption)
}

#[test]
fn test_scheduled_to_every_exemption_is_allowed() {
    let validator = ReviewScheduleStatusTransitionValidator::new();
    for exempt in exempt_statuses() {
        assert!(validator.is_allowed(Status::Scheduled, exempt), "SCHEDULED -> {exempt}");
        assert!(validator.is_allowed(exempt, Status::Scheduled), "{exempt} -> SCHEDULED");
    }
}

#[test]
fn test_allow_list_has_two_entries_per_exemption() {
    let validator = ReviewScheduleStatusTransitionValidator::default();
    assert_eq!(exempt_statuses().count(), 14);
    assert_eq!(validator.allowed_transitions().count(), 28);
}

#[test]
fn test_scheduled_to_scheduled_is_rejected() {
    let validator = ReviewScheduleStatusTransitionValidator::new();
    assert!(!validator.is_allowed(Status::Scheduled, Status::Scheduled));
}

#[test]
fn test_exemption_to_exemption_is_rejected() {
    let validator = ReviewScheduleStatusTransitionValidator::new();
    for from in exempt_statuses() {
        for to in exempt_statuses() {
            assert!(!validator.is_allowed(from, to), "{from} -> {to}");
        }
    }
}

#[test]
fn test_completed_is_terminal_and_unreachable() {
    let validator = ReviewScheduleStatusTransitionValidator::new();
    for status in Status::ALL {
        assert!(!validator.is_allowed(Status::Completed, status));
        assert!(!validator.is_allowed(status, Status::Completed));
    }
}

#[test]
fn test_validate_reports_the_attempted_move() {
    let validator = ReviewScheduleStatusTransitionValidator::new();
    let prison_number = PrisonNumberFixtures::a1234bc();

    let result = validator.validate(
        &prison_number,
        Status::ExemptPrisonerTransfer,
        Status::ExemptPrisonerRelease,
    );

    match result {
        Err(ReviewScheduleError::InvalidStatusTransition { prison_number: pn, from, to }) => {
            assert_eq!(pn, prison_number);
            assert_eq!(from, Status::ExemptPrisonerTransfer);
            assert_eq!(to, Status::ExemptPrisonerRelease);
        }
        other => panic!("Expected InvalidStatusTransition, got {other:?}"),
    }

    assert!(validator
        .validate(&prison_number, Status::Scheduled, Status::ExemptPrisonerDeath)
        .is_ok());
}

proptest! {
    #[test]
    fn allowed_moves_always_touch_scheduled(from in status_strategy(), to in status_strategy()) {
        let validator = ReviewScheduleStatusTransitionValidator::new();
        let expected = (from == Status::Scheduled && to.is_exemption())
            || (from.is_exemption() && to == Status::Scheduled);
        prop_assert_eq!(validator.is_allowed(from, to), expected);
    }
}
