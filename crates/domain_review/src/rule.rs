//! Review schedule calculation rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// The reason driving how a review window is computed
///
/// Exactly one rule applies to any combination of sentence data and
/// transfer/readmission flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewScheduleCalculationRule {
    #[serde(rename = "PRISONER_TRANSFER")]
    PrisonerTransfer,
    #[serde(rename = "PRISONER_READMISSION")]
    PrisonerReadmission,
    #[serde(rename = "PRISONER_ON_REMAND")]
    PrisonerOnRemand,
    #[serde(rename = "PRISONER_UN_SENTENCED")]
    PrisonerUnSentenced,
    #[serde(rename = "INDETERMINATE_SENTENCE")]
    IndeterminateSentence,
    #[serde(rename = "BETWEEN_RELEASE_AND_3_MONTHS_TO_SERVE")]
    BetweenReleaseAnd3MonthsToServe,
    #[serde(rename = "BETWEEN_3_MONTHS_AND_3_MONTHS_7_DAYS_TO_SERVE")]
    Between3MonthsAnd3Months7DaysToServe,
    #[serde(rename = "BETWEEN_3_MONTHS_8_DAYS_AND_6_MONTHS_TO_SERVE")]
    Between3Months8DaysAnd6MonthsToServe,
    #[serde(rename = "BETWEEN_6_AND_12_MONTHS_TO_SERVE")]
    Between6And12MonthsToServe,
    #[serde(rename = "BETWEEN_12_AND_60_MONTHS_TO_SERVE")]
    Between12And60MonthsToServe,
    #[serde(rename = "MORE_THAN_60_MONTHS_TO_SERVE")]
    MoreThan60MonthsToServe,
}

impl ReviewScheduleCalculationRule {
    pub const ALL: [ReviewScheduleCalculationRule; 11] = [
        ReviewScheduleCalculationRule::PrisonerTransfer,
        ReviewScheduleCalculationRule::PrisonerReadmission,
        ReviewScheduleCalculationRule::PrisonerOnRemand,
        ReviewScheduleCalculationRule::PrisonerUnSentenced,
        ReviewScheduleCalculationRule::IndeterminateSentence,
        ReviewScheduleCalculationRule::BetweenReleaseAnd3MonthsToServe,
        ReviewScheduleCalculationRule::Between3MonthsAnd3Months7DaysToServe,
        ReviewScheduleCalculationRule::Between3Months8DaysAnd6MonthsToServe,
        ReviewScheduleCalculationRule::Between6And12MonthsToServe,
        ReviewScheduleCalculationRule::Between12And60MonthsToServe,
        ReviewScheduleCalculationRule::MoreThan60MonthsToServe,
    ];

    pub fn as_str(&self) -> &'static str {
        use ReviewScheduleCalculationRule::*;
        match self {
            PrisonerTransfer => "PRISONER_TRANSFER",
            PrisonerReadmission => "PRISONER_READMISSION",
            PrisonerOnRemand => "PRISONER_ON_REMAND",
            PrisonerUnSentenced => "PRISONER_UN_SENTENCED",
            IndeterminateSentence => "INDETERMINATE_SENTENCE",
            BetweenReleaseAnd3MonthsToServe => "BETWEEN_RELEASE_AND_3_MONTHS_TO_SERVE",
            Between3MonthsAnd3Months7DaysToServe => "BETWEEN_3_MONTHS_AND_3_MONTHS_7_DAYS_TO_SERVE",
            Between3Months8DaysAnd6MonthsToServe => "BETWEEN_3_MONTHS_8_DAYS_AND_6_MONTHS_TO_SERVE",
            Between6And12MonthsToServe => "BETWEEN_6_AND_12_MONTHS_TO_SERVE",
            Between12And60MonthsToServe => "BETWEEN_12_AND_60_MONTHS_TO_SERVE",
            MoreThan60MonthsToServe => "MORE_THAN_60_MONTHS_TO_SERVE",
        }
    }

    /// True for the rules derived from time left to serve before release
    pub fn is_time_to_serve_band(&self) -> bool {
        use ReviewScheduleCalculationRule::*;
        matches!(
            self,
            BetweenReleaseAnd3MonthsToServe
                | Between3MonthsAnd3Months7DaysToServe
                | Between3Months8DaysAnd6MonthsToServe
                | Between6And12MonthsToServe
                | Between12And60MonthsToServe
                | MoreThan60MonthsToServe
        )
    }
}

impl fmt::Display for ReviewScheduleCalculationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_name_matches_display() {
        for rule in ReviewScheduleCalculationRule::ALL {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule));
        }
    }

    #[test]
    fn test_time_to_serve_bands() {
        let bands = ReviewScheduleCalculationRule::ALL
            .iter()
            .filter(|r| r.is_time_to_serve_band())
            .count();
        assert_eq!(bands, 6);
        assert!(!ReviewScheduleCalculationRule::PrisonerTransfer.is_time_to_serve_band());
    }
}
