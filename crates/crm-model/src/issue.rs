//! Validation issue types.
//!
//! Issues are tagged values carrying the row and field they concern. The
//! human-readable text is produced by [`Issue::message`] only when displayed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::destination::DestinationField;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks import of the record
    Error,
    /// Imported, but should be reviewed
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Validation issue - each variant carries only its needed data.
///
/// `row` is the 0-based record index; messages show it 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Required field is blank
    MissingRequired { row: usize, field: DestinationField },
    /// Neither email nor phone number is present
    MissingContactMethod { row: usize },
    /// Email present but not `local@domain.tld`
    InvalidEmail { row: usize, value: String },
    /// LinkedIn URL does not mention linkedin.com
    SuspiciousLinkedin { row: usize, field: DestinationField },
}

/// Row-independent identity of an issue, used to group occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IssueKind {
    MissingRequired(DestinationField),
    MissingContactMethod,
    InvalidEmail,
    SuspiciousLinkedin(DestinationField),
}

impl IssueKind {
    /// Message text without the row prefix.
    pub fn description(&self) -> String {
        match self {
            IssueKind::MissingRequired(field) => {
                format!("Missing required field '{}'", display_name(*field))
            }
            IssueKind::MissingContactMethod => "Must have either email or phone number".to_string(),
            IssueKind::InvalidEmail => "Invalid email format".to_string(),
            IssueKind::SuspiciousLinkedin(field) => {
                format!("{} URL may be invalid", display_name(*field))
            }
        }
    }
}

impl Issue {
    pub fn row(&self) -> usize {
        match self {
            Issue::MissingRequired { row, .. }
            | Issue::MissingContactMethod { row }
            | Issue::InvalidEmail { row, .. }
            | Issue::SuspiciousLinkedin { row, .. } => *row,
        }
    }

    /// Destination field the issue concerns, if it is about a single field.
    pub fn field(&self) -> Option<DestinationField> {
        match self {
            Issue::MissingRequired { field, .. } | Issue::SuspiciousLinkedin { field, .. } => {
                Some(*field)
            }
            Issue::InvalidEmail { .. } => Some(DestinationField::ContactPrimaryEmail),
            Issue::MissingContactMethod { .. } => None,
        }
    }

    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::MissingRequired { field, .. } => IssueKind::MissingRequired(*field),
            Issue::MissingContactMethod { .. } => IssueKind::MissingContactMethod,
            Issue::InvalidEmail { .. } => IssueKind::InvalidEmail,
            Issue::SuspiciousLinkedin { field, .. } => IssueKind::SuspiciousLinkedin(*field),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::SuspiciousLinkedin { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// Display text, e.g. `Row 3: Missing required field 'First Name'`.
    pub fn message(&self) -> String {
        format!("Row {}: {}", self.row() + 1, self.kind().description())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Name shown to users for a validated field.
pub fn display_name(field: DestinationField) -> &'static str {
    match field {
        DestinationField::ContactFirstName => "First Name",
        DestinationField::ContactLastName => "Last Name",
        DestinationField::AccountName => "Company Name",
        DestinationField::AccountDomainName => "Website/Domain",
        DestinationField::ContactLinkedinUrl => "Personal LinkedIn",
        DestinationField::AccountLinkedinUrl => "Company LinkedIn",
        DestinationField::ContactPrimaryEmail => "Email",
        DestinationField::ContactPrimaryPhoneNumber => "Phone Number",
        DestinationField::ContactAccountRoleTitle => "Job Title",
        DestinationField::ContactOwnerId => "Contact Owner",
        DestinationField::AccountOwnerId => "Account Owner",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_one_based_rows() {
        let issue = Issue::MissingRequired {
            row: 0,
            field: DestinationField::ContactFirstName,
        };
        assert_eq!(issue.message(), "Row 1: Missing required field 'First Name'");
        assert_eq!(issue.severity(), Severity::Error);
    }

    #[test]
    fn linkedin_issue_is_a_warning() {
        let issue = Issue::SuspiciousLinkedin {
            row: 4,
            field: DestinationField::AccountLinkedinUrl,
        };
        assert_eq!(issue.message(), "Row 5: Company LinkedIn URL may be invalid");
        assert!(!issue.is_error());
    }

    #[test]
    fn issue_serializes_with_kind_tag() {
        let issue = Issue::MissingContactMethod { row: 2 };
        let json = serde_json::to_value(&issue).expect("serialize issue");
        assert_eq!(json["kind"], "missing_contact_method");
        assert_eq!(json["row"], 2);
    }
}
