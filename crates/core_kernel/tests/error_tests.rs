//! Tests for core_kernel error types

use chrono::NaiveDate;
use core_kernel::error::CoreError;
use core_kernel::{DateRange, PortError, TemporalError};

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_from_temporal_error() {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let temporal: TemporalError = DateRange::new(start, end).unwrap_err();
    let core_error: CoreError = temporal.into();

    assert!(matches!(core_error, CoreError::Temporal(TemporalError::InvalidPeriod { .. })));
    assert!(core_error.to_string().contains("2024-03-01"));
}

#[test]
fn test_port_error_display() {
    let error = PortError::not_found("ReviewSchedule", "RVS-123");
    assert_eq!(error.to_string(), "Not found: ReviewSchedule with id RVS-123");
}

#[test]
fn test_port_error_conflict_is_not_not_found() {
    let error = PortError::conflict("Review schedule RVS-123 already exists");
    assert!(!error.is_not_found());
    assert!(error.to_string().starts_with("Conflict:"));
}
