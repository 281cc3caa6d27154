use crm_model::{DestinationRecord, Issue};

/// A record needs an email or a phone number.
pub fn check(record: &DestinationRecord, row: usize) -> Option<Issue> {
    let has_email = !record.contact_primary_email.trim().is_empty();
    let has_phone = !record.contact_primary_phone_number.trim().is_empty();
    (!has_email && !has_phone).then_some(Issue::MissingContactMethod { row })
}
