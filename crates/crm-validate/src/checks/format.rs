//! Format checks for email and LinkedIn values.

use std::sync::LazyLock;

use crm_model::{DestinationField, DestinationRecord, Issue};
use regex::Regex;

/// `local@domain.tld` with an alphabetic TLD of two or more letters.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

const LINKEDIN_HOST: &str = "linkedin.com";

const LINKEDIN_FIELDS: [DestinationField; 2] = [
    DestinationField::ContactLinkedinUrl,
    DestinationField::AccountLinkedinUrl,
];

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Blank emails are left to the contact method check.
pub fn check_email(record: &DestinationRecord, row: usize) -> Option<Issue> {
    let email = record.contact_primary_email.as_str();
    if email.trim().is_empty() || is_valid_email(email) {
        return None;
    }
    Some(Issue::InvalidEmail {
        row,
        value: email.to_string(),
    })
}

/// Warn on LinkedIn values that do not mention linkedin.com.
pub fn check_linkedin(record: &DestinationRecord, row: usize) -> Vec<Issue> {
    LINKEDIN_FIELDS
        .into_iter()
        .filter(|&field| {
            let value = record.get(field);
            !value.trim().is_empty() && !value.to_lowercase().contains(LINKEDIN_HOST)
        })
        .map(|field| Issue::SuspiciousLinkedin { row, field })
        .collect()
}
