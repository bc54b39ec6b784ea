//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for review scheduling tests.
//! These fixtures are consistent and predictable: every calculation is
//! anchored on a fixed "today".

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{FixedClock, PrisonNumber};
use domain_review::ReviewWindowCalculator;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The fixed "today" used by fixture calculators (Jan 15, 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// A month-end "today" for clamping tests (Aug 31, 2024)
    pub fn month_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 31).unwrap()
    }

    /// An earliest-calculation-date override (Apr 1, 2025)
    pub fn override_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    /// Shorthand for building a date
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Fixture for prison numbers
pub struct PrisonNumberFixtures;

impl PrisonNumberFixtures {
    pub fn a1234bc() -> PrisonNumber {
        PrisonNumber::new("A1234BC").unwrap()
    }

    pub fn g6115va() -> PrisonNumber {
        PrisonNumber::new("G6115VA").unwrap()
    }
}

/// Fixture for calculators
pub struct CalculatorFixtures;

impl CalculatorFixtures {
    /// Calculator whose clock is stuck on the given date, no override
    pub fn on(today: NaiveDate) -> ReviewWindowCalculator {
        ReviewWindowCalculator::with_clock(Arc::new(FixedClock::new(today)), None)
    }

    /// Calculator anchored on [`TemporalFixtures::today`]
    pub fn fixed() -> ReviewWindowCalculator {
        Self::on(TemporalFixtures::today())
    }

    /// Calculator with a clock on `today` and an earliest-date override
    pub fn with_override(today: NaiveDate, earliest: NaiveDate) -> ReviewWindowCalculator {
        ReviewWindowCalculator::with_clock(Arc::new(FixedClock::new(today)), Some(earliest))
    }
}
