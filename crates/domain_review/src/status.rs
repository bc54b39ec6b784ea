//! Review schedule statuses
//!
//! Besides SCHEDULED and COMPLETED a schedule can be put on hold with one of
//! the EXEMPT_* statuses. Exemptions fall into classes that decide how far
//! the due date is pushed back once the schedule is active again.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a review schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewScheduleStatus {
    Scheduled,
    Completed,
    ExemptPrisonerDrugOrAlcoholDependency,
    ExemptPrisonerOtherHealthIssues,
    ExemptPrisonerFailedToEngage,
    ExemptPrisonerEscapedOrAbsconded,
    ExemptPrisonerSafetyIssues,
    ExemptPrisonRegimeCircumstances,
    ExemptPrisonStaffRedeployment,
    ExemptPrisonOperationOrSecurityIssue,
    ExemptSecurityIssueRiskToStaff,
    ExemptSystemTechnicalIssue,
    ExemptPrisonerTransfer,
    ExemptPrisonerRelease,
    ExemptPrisonerDeath,
    ExemptPrisonerMerge,
}

/// How an exemption affects the due date when it is lifted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExemptionClass {
    /// Prisoner-centred reasons; due date floored at today + 10 days
    Exclusion,
    /// Operational reasons; due date floored at today + 5 days
    Exemption,
    /// Outage of the recording system; treated like `Exemption`
    SystemTechnicalIssue,
}

impl ExemptionClass {
    /// Minimum number of days from today before the review falls due
    pub fn due_date_floor_days(&self) -> u64 {
        match self {
            ExemptionClass::Exclusion => 10,
            ExemptionClass::Exemption | ExemptionClass::SystemTechnicalIssue => 5,
        }
    }
}

impl ReviewScheduleStatus {
    pub const ALL: [ReviewScheduleStatus; 16] = [
        ReviewScheduleStatus::Scheduled,
        ReviewScheduleStatus::Completed,
        ReviewScheduleStatus::ExemptPrisonerDrugOrAlcoholDependency,
        ReviewScheduleStatus::ExemptPrisonerOtherHealthIssues,
        ReviewScheduleStatus::ExemptPrisonerFailedToEngage,
        ReviewScheduleStatus::ExemptPrisonerEscapedOrAbsconded,
        ReviewScheduleStatus::ExemptPrisonerSafetyIssues,
        ReviewScheduleStatus::ExemptPrisonRegimeCircumstances,
        ReviewScheduleStatus::ExemptPrisonStaffRedeployment,
        ReviewScheduleStatus::ExemptPrisonOperationOrSecurityIssue,
        ReviewScheduleStatus::ExemptSecurityIssueRiskToStaff,
        ReviewScheduleStatus::ExemptSystemTechnicalIssue,
        ReviewScheduleStatus::ExemptPrisonerTransfer,
        ReviewScheduleStatus::ExemptPrisonerRelease,
        ReviewScheduleStatus::ExemptPrisonerDeath,
        ReviewScheduleStatus::ExemptPrisonerMerge,
    ];

    /// Returns the exemption class, or `None` for SCHEDULED and COMPLETED
    pub fn exemption_class(&self) -> Option<ExemptionClass> {
        use ReviewScheduleStatus::*;
        match self {
            Scheduled | Completed => None,
            ExemptPrisonerDrugOrAlcoholDependency
            | ExemptPrisonerOtherHealthIssues
            | ExemptSecurityIssueRiskToStaff
            | ExemptPrisonerSafetyIssues
            | ExemptPrisonRegimeCircumstances => Some(ExemptionClass::Exclusion),
            ExemptPrisonerFailedToEngage
            | ExemptPrisonerEscapedOrAbsconded
            | ExemptPrisonStaffRedeployment
            | ExemptPrisonOperationOrSecurityIssue
            | ExemptPrisonerTransfer
            | ExemptPrisonerRelease
            | ExemptPrisonerDeath
            | ExemptPrisonerMerge => Some(ExemptionClass::Exemption),
            ExemptSystemTechnicalIssue => Some(ExemptionClass::SystemTechnicalIssue),
        }
    }

    /// Any EXEMPT_* status
    pub fn is_exemption(&self) -> bool {
        self.exemption_class().is_some()
    }

    pub fn is_exclusion(&self) -> bool {
        self.exemption_class() == Some(ExemptionClass::Exclusion)
    }

    pub fn as_str(&self) -> &'static str {
        use ReviewScheduleStatus::*;
        match self {
            Scheduled => "SCHEDULED",
            Completed => "COMPLETED",
            ExemptPrisonerDrugOrAlcoholDependency => "EXEMPT_PRISONER_DRUG_OR_ALCOHOL_DEPENDENCY",
            ExemptPrisonerOtherHealthIssues => "EXEMPT_PRISONER_OTHER_HEALTH_ISSUES",
            ExemptPrisonerFailedToEngage => "EXEMPT_PRISONER_FAILED_TO_ENGAGE",
            ExemptPrisonerEscapedOrAbsconded => "EXEMPT_PRISONER_ESCAPED_OR_ABSCONDED",
            ExemptPrisonerSafetyIssues => "EXEMPT_PRISONER_SAFETY_ISSUES",
            ExemptPrisonRegimeCircumstances => "EXEMPT_PRISON_REGIME_CIRCUMSTANCES",
            ExemptPrisonStaffRedeployment => "EXEMPT_PRISON_STAFF_REDEPLOYMENT",
            ExemptPrisonOperationOrSecurityIssue => "EXEMPT_PRISON_OPERATION_OR_SECURITY_ISSUE",
            ExemptSecurityIssueRiskToStaff => "EXEMPT_SECURITY_ISSUE_RISK_TO_STAFF",
            ExemptSystemTechnicalIssue => "EXEMPT_SYSTEM_TECHNICAL_ISSUE",
            ExemptPrisonerTransfer => "EXEMPT_PRISONER_TRANSFER",
            ExemptPrisonerRelease => "EXEMPT_PRISONER_RELEASE",
            ExemptPrisonerDeath => "EXEMPT_PRISONER_DEATH",
            ExemptPrisonerMerge => "EXEMPT_PRISONER_MERGE",
        }
    }
}

impl fmt::Display for ReviewScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
