//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Days, NaiveDate};
use core_kernel::PrisonNumber;
use domain_review::{
    ReviewSchedule, ReviewScheduleCalculationRule, ReviewScheduleStatus, ReviewScheduleWindow,
    SentenceDetails, SentenceType,
};
use proptest::prelude::*;
use proptest::sample::select;

/// Strategy for dates between 2000-01-01 and roughly 2060
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..22_000u64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(days)
    })
}

/// Strategy for dates within 10 years either side of `anchor`
pub fn date_around_strategy(anchor: NaiveDate) -> impl Strategy<Value = NaiveDate> {
    (0u64..7_300u64).prop_map(move |offset| anchor - Days::new(3_650) + Days::new(offset))
}

/// Strategy for valid prison numbers
pub fn prison_number_strategy() -> impl Strategy<Value = PrisonNumber> {
    "[A-Z][0-9]{4}[A-Z]{2}".prop_map(|s| PrisonNumber::new(s).unwrap())
}

pub fn sentence_type_strategy() -> impl Strategy<Value = SentenceType> {
    select(SentenceType::ALL.to_vec())
}

pub fn calculation_rule_strategy() -> impl Strategy<Value = ReviewScheduleCalculationRule> {
    select(ReviewScheduleCalculationRule::ALL.to_vec())
}

pub fn status_strategy() -> impl Strategy<Value = ReviewScheduleStatus> {
    select(ReviewScheduleStatus::ALL.to_vec())
}

/// Strategy for statuses in the exclusion class
pub fn exclusion_status_strategy() -> impl Strategy<Value = ReviewScheduleStatus> {
    let exclusions: Vec<_> = ReviewScheduleStatus::ALL
        .into_iter()
        .filter(ReviewScheduleStatus::is_exclusion)
        .collect();
    select(exclusions)
}

/// Strategy for exempt statuses outside the exclusion class
pub fn non_exclusion_exemption_strategy() -> impl Strategy<Value = ReviewScheduleStatus> {
    let exemptions: Vec<_> = ReviewScheduleStatus::ALL
        .into_iter()
        .filter(|s| s.is_exemption() && !s.is_exclusion())
        .collect();
    select(exemptions)
}

/// Strategy for sentence details, with and without release dates and flags
pub fn sentence_details_strategy(anchor: NaiveDate) -> impl Strategy<Value = SentenceDetails> {
    (
        sentence_type_strategy(),
        proptest::option::of(date_around_strategy(anchor)),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(sentence_type, release_date, is_readmission, is_transfer)| SentenceDetails {
            sentence_type,
            release_date,
            is_readmission,
            is_transfer,
        })
}

/// Strategy for schedules with the given status and a latest review date near `anchor`
pub fn schedule_with_status_strategy(
    anchor: NaiveDate,
    status: impl Strategy<Value = ReviewScheduleStatus>,
) -> impl Strategy<Value = ReviewSchedule> {
    (prison_number_strategy(), date_around_strategy(anchor), status).prop_map(
        |(prison_number, latest, status)| {
            let window = ReviewScheduleWindow::new(latest, latest).unwrap();
            let mut schedule = ReviewSchedule::new(
                prison_number,
                ReviewScheduleCalculationRule::Between12And60MonthsToServe,
                window,
            );
            schedule.schedule_status = status;
            schedule
        },
    )
}
