//! Audit entries produced while normalizing a record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which normalization produced a [`CleaningStep`].
///
/// Reports group the cleaning log by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StepField {
    #[serde(rename = "Contact Owner")]
    ContactOwner,
    #[serde(rename = "Account Owner")]
    AccountOwner,
    #[serde(rename = "Website → Domain")]
    Domain,
    #[serde(rename = "Phone Number")]
    PhoneNumber,
    #[serde(rename = "Phone Selection")]
    PhoneSelection,
}

impl StepField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ContactOwner => "Contact Owner",
            Self::AccountOwner => "Account Owner",
            Self::Domain => "Website → Domain",
            Self::PhoneNumber => "Phone Number",
            Self::PhoneSelection => "Phone Selection",
        }
    }
}

impl fmt::Display for StepField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of the record a step belongs to, assigned by the batch driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTag {
    /// 0-based position in the input.
    pub index: usize,
    /// `"<first> <last>"` taken from the source row.
    pub name: String,
}

/// One normalization applied to one field of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningStep {
    pub field: StepField,
    pub original: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned: Option<String>,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordTag>,
}

impl CleaningStep {
    pub fn new(
        field: StepField,
        original: impl Into<String>,
        cleaned: Option<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            field,
            original: original.into(),
            cleaned,
            action: action.into(),
            record: None,
        }
    }

    /// Attach the record identity.
    #[must_use]
    pub fn tagged(mut self, index: usize, name: impl Into<String>) -> Self {
        self.record = Some(RecordTag {
            index,
            name: name.into(),
        });
        self
    }

    /// 1-based record number for display, if tagged.
    pub fn record_number(&self) -> Option<usize> {
        self.record.as_ref().map(|tag| tag.index + 1)
    }
}
