//! Per-record validation rules.
//!
//! Every rule runs on every record; one failing rule never hides another.

mod contact;
mod format;
mod required;

use crm_model::{DestinationRecord, Issue};

use crate::report::RecordValidation;

pub use format::is_valid_email;
pub use required::REQUIRED_FIELDS;

/// Validate one record. `index` is the 0-based position in the run.
pub fn validate_record(record: &DestinationRecord, index: usize) -> RecordValidation {
    let mut issues: Vec<Issue> = Vec::new();
    issues.extend(required::check(record, index));
    issues.extend(contact::check(record, index));
    issues.extend(format::check_email(record, index));
    issues.extend(format::check_linkedin(record, index));
    RecordValidation {
        index,
        name: record.display_name(),
        issues,
    }
}
