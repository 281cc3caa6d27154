//! Required field checks.

use crm_model::{DestinationField, DestinationRecord, Issue};

/// Fields that must be non-blank for a record to be importable.
pub const REQUIRED_FIELDS: [DestinationField; 4] = [
    DestinationField::ContactFirstName,
    DestinationField::ContactLastName,
    DestinationField::AccountName,
    DestinationField::AccountDomainName,
];

/// One issue per required field that is blank after trimming.
pub fn check(record: &DestinationRecord, row: usize) -> Vec<Issue> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|&field| record.get(field).trim().is_empty())
        .map(|field| Issue::MissingRequired { row, field })
        .collect()
}
