//! Sentence data consumed by review schedule calculations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Legal status of a prisoner's sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentenceType {
    Sentenced,
    Recall,
    ConvictedUnsentenced,
    Remand,
    CivilPrisoner,
    ImmigrationDetainee,
    IndeterminateSentence,
    Dead,
    Unknown,
    Other,
}

impl SentenceType {
    pub const ALL: [SentenceType; 10] = [
        SentenceType::Sentenced,
        SentenceType::Recall,
        SentenceType::ConvictedUnsentenced,
        SentenceType::Remand,
        SentenceType::CivilPrisoner,
        SentenceType::ImmigrationDetainee,
        SentenceType::IndeterminateSentence,
        SentenceType::Dead,
        SentenceType::Unknown,
        SentenceType::Other,
    ];

    /// Returns the canonical upper snake case name
    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceType::Sentenced => "SENTENCED",
            SentenceType::Recall => "RECALL",
            SentenceType::ConvictedUnsentenced => "CONVICTED_UNSENTENCED",
            SentenceType::Remand => "REMAND",
            SentenceType::CivilPrisoner => "CIVIL_PRISONER",
            SentenceType::ImmigrationDetainee => "IMMIGRATION_DETAINEE",
            SentenceType::IndeterminateSentence => "INDETERMINATE_SENTENCE",
            SentenceType::Dead => "DEAD",
            SentenceType::Unknown => "UNKNOWN",
            SentenceType::Other => "OTHER",
        }
    }

    /// Sentences that are expected to carry a release date
    pub fn expects_release_date(&self) -> bool {
        matches!(self, SentenceType::Sentenced | SentenceType::Recall)
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The inputs a schedule calculation needs about a prisoner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceDetails {
    pub sentence_type: SentenceType,
    pub release_date: Option<NaiveDate>,
    /// Prisoner has been readmitted to custody
    pub is_readmission: bool,
    /// Prisoner has arrived from another establishment
    pub is_transfer: bool,
}

impl SentenceDetails {
    pub fn new(sentence_type: SentenceType, release_date: Option<NaiveDate>) -> Self {
        Self {
            sentence_type,
            release_date,
            is_readmission: false,
            is_transfer: false,
        }
    }

    pub fn readmission(mut self) -> Self {
        self.is_readmission = true;
        self
    }

    pub fn transfer(mut self) -> Self {
        self.is_transfer = true;
        self
    }
}
