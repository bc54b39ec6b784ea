//! Custom Test Assertions
//!
//! Assertion helpers for review scheduling types that give more meaningful
//! failure messages than plain `assert_eq!`.

use chrono::NaiveDate;
use domain_review::{ReviewSchedule, ReviewScheduleEvent, ReviewScheduleWindow};

/// Asserts that a window is exactly `[from, to]`
pub fn assert_window(window: Option<ReviewScheduleWindow>, from: NaiveDate, to: NaiveDate) {
    match window {
        Some(w) => assert!(
            w.date_from == from && w.date_to == to,
            "Expected review window {}..={}, got {}..={}",
            from,
            to,
            w.date_from,
            w.date_to
        ),
        None => panic!("Expected review window {}..={}, got no window", from, to),
    }
}

/// Asserts that a window is ordered
pub fn assert_window_ordered(window: &ReviewScheduleWindow) {
    assert!(
        window.date_from <= window.date_to,
        "Review window is reversed: {}..={}",
        window.date_from,
        window.date_to
    );
}

/// Asserts that a schedule's dates match the window
pub fn assert_schedule_covers(schedule: &ReviewSchedule, from: NaiveDate, to: NaiveDate) {
    assert_eq!(
        (schedule.earliest_review_date, schedule.latest_review_date),
        (from, to),
        "Schedule {} for {} has unexpected review dates",
        schedule.reference,
        schedule.prison_number
    );
}

/// Asserts the sequence of event types published
pub fn assert_event_types(events: &[ReviewScheduleEvent], expected: &[&str]) {
    let actual: Vec<&str> = events.iter().map(ReviewScheduleEvent::event_type).collect();
    assert_eq!(actual, expected, "Unexpected events published");
}
