//! Unit tests for the Temporal module
//!
//! Tests cover clocks, calendar arithmetic, and DateRange.

use chrono::NaiveDate;
use core_kernel::temporal::{minus_days, plus_days, plus_months};
use core_kernel::{Clock, DateRange, FixedClock, SystemClock, TemporalError};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod clocks {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::new(date(2025, 1, 31));
        assert_eq!(clock.today(), clock.today());
        assert_eq!(clock.today(), date(2025, 1, 31));
    }

    #[test]
    fn test_system_clock_returns_utc_today() {
        let today = SystemClock.today();
        let utc_today = chrono::Utc::now().date_naive();
        assert!((utc_today - today).num_days().abs() <= 1);
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_plus_months_keeps_day_when_possible() {
        assert_eq!(plus_months(date(2024, 1, 15), 3), date(2024, 4, 15));
        assert_eq!(plus_months(date(2024, 11, 15), 3), date(2025, 2, 15));
    }

    #[test]
    fn test_plus_months_leap_year() {
        assert_eq!(plus_months(date(2024, 2, 29), 12), date(2025, 2, 28));
        assert_eq!(plus_months(date(2024, 2, 29), 48), date(2028, 2, 29));
    }

    #[test]
    fn test_plus_and_minus_days() {
        assert_eq!(plus_days(date(2024, 12, 28), 10), date(2025, 1, 7));
        assert_eq!(minus_days(date(2025, 3, 3), 7), date(2025, 2, 24));
    }
}

mod date_range {
    use super::*;

    #[test]
    fn test_single_day_range_is_valid() {
        let range = DateRange::new(date(2024, 5, 1), date(2024, 5, 1)).unwrap();
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_reversed_range_fails() {
        let result = DateRange::new(date(2024, 6, 1), date(2024, 5, 1));
        assert_eq!(
            result,
            Err(TemporalError::InvalidPeriod {
                start: "2024-06-01".to_string(),
                end: "2024-05-01".to_string(),
            })
        );
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2024, 5, 1), date(2024, 5, 31)).unwrap();
        assert_eq!(range.to_string(), "2024-05-01..=2024-05-31");
    }
}

proptest! {
    #[test]
    fn plus_months_never_moves_backwards(days in 0i64..36_500, months in 0u32..120) {
        let start = date(2000, 1, 1) + chrono::Duration::days(days);
        prop_assert!(plus_months(start, months) >= start);
    }

    #[test]
    fn plus_then_minus_days_is_identity(days in 0i64..36_500, offset in 0u64..1_000) {
        let start = date(2000, 1, 1) + chrono::Duration::days(days);
        prop_assert_eq!(minus_days(plus_days(start, offset), offset), start);
    }
}
