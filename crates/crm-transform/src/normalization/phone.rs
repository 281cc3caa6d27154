//! Phone cleanup and priority-based selection.

use std::sync::LazyLock;

use crm_model::{CleaningStep, PhonePriority, SourceRecord, StepField};
use regex::Regex;

use super::Cleaned;

/// Anything other than digits, `+`, `-`, parentheses and whitespace.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\d+\-()\s]").expect("valid phone regex"));

/// Strip characters that do not belong in a dialable number.
///
/// Digits, `+`, `-`, `(`, `)` and whitespace survive. A step is produced only
/// when the result differs from the trimmed input.
pub fn clean_phone(raw: &str) -> Cleaned {
    let original = raw.trim();
    if original.is_empty() {
        return Cleaned::unchanged(String::new());
    }
    let cleaned = DISALLOWED.replace_all(original, "").into_owned();
    if cleaned == original {
        return Cleaned::unchanged(cleaned);
    }
    let step = CleaningStep::new(
        StepField::PhoneNumber,
        original,
        Some(cleaned.clone()),
        "Remove special characters",
    );
    Cleaned::changed(cleaned, step)
}

/// The phone column that won selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPhone {
    pub field: &'static str,
    pub value: String,
}

/// Outcome of choosing the primary phone of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneSelection {
    pub selected: Option<SelectedPhone>,
    /// Every non-blank phone column, cleaned, in priority order.
    pub available: Vec<SelectedPhone>,
    /// Per-number cleanup steps followed by the selection summary.
    pub steps: Vec<CleaningStep>,
}

impl PhoneSelection {
    pub fn value(&self) -> &str {
        self.selected
            .as_ref()
            .map(|phone| phone.value.as_str())
            .unwrap_or_default()
    }
}

/// Pick the first non-blank phone column in `priority` order.
///
/// Every available number is cleaned so its cleanup is audited even when a
/// higher-priority number wins.
pub fn select_phone(record: &SourceRecord, priority: &PhonePriority) -> PhoneSelection {
    let mut selection = PhoneSelection::default();
    for &field in priority {
        let Some(raw) = record.non_blank(field) else {
            continue;
        };
        let cleaned = clean_phone(raw);
        selection.steps.extend(cleaned.step);
        selection.available.push(SelectedPhone {
            field,
            value: cleaned.value,
        });
    }

    if let Some(first) = selection.available.first().cloned() {
        let fields: Vec<&str> = selection.available.iter().map(|phone| phone.field).collect();
        selection.steps.push(CleaningStep::new(
            StepField::PhoneSelection,
            format!("Available: {}", fields.join(", ")),
            Some(first.value.clone()),
            format!("Selected {} (highest priority)", first.field),
        ));
        selection.selected = Some(first);
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_model::PHONE_PRIORITY;

    #[test]
    fn formatting_characters_survive() {
        let cleaned = clean_phone("+1 (203) 451-7659");
        assert_eq!(cleaned.value, "+1 (203) 451-7659");
        assert!(cleaned.step.is_none());
    }

    #[test]
    fn letters_and_dots_are_removed() {
        let cleaned = clean_phone(" 203.451.7659 ext 4 ");
        assert_eq!(cleaned.value, "2034517659  4");
        let step = cleaned.step.expect("phone step");
        assert_eq!(step.original, "203.451.7659 ext 4");
        assert_eq!(step.action, "Remove special characters");
    }

    #[test]
    fn mobile_wins_over_direct() {
        let record = SourceRecord::new()
            .with("Mobile", "+1 203-451-7659")
            .with("Direct", "+1 203-557-0353");
        let selection = select_phone(&record, &PHONE_PRIORITY);
        assert_eq!(selection.value(), "+1 203-451-7659");
        assert_eq!(selection.available.len(), 2);
        assert_eq!(selection.steps.len(), 1);
        let summary = &selection.steps[0];
        assert_eq!(summary.field, StepField::PhoneSelection);
        assert_eq!(summary.original, "Available: Mobile, Direct");
        assert_eq!(summary.action, "Selected Mobile (highest priority)");
    }

    #[test]
    fn blank_columns_are_skipped() {
        let mut record = SourceRecord::new().with("Mobile", "   ").with("Office", "555.0100");
        record.insert("Direct", None);
        let selection = select_phone(&record, &PHONE_PRIORITY);
        let selected = selection.selected.expect("office selected");
        assert_eq!(selected.field, "Office");
        assert_eq!(selected.value, "5550100");
        assert_eq!(selection.steps.len(), 2);
        assert_eq!(selection.steps[0].field, StepField::PhoneNumber);
        assert_eq!(selection.steps[1].original, "Available: Office");
    }

    #[test]
    fn direct_wins_when_mobile_blank() {
        let blank_mobile = SourceRecord::new()
            .with("Mobile", "  ")
            .with("Direct", "+1 203-557-0353")
            .with("Office", "+1 203-000-0000");
        let mut null_mobile = blank_mobile.clone();
        null_mobile.insert("Mobile", None);
        let absent_mobile: SourceRecord = blank_mobile
            .iter()
            .filter(|(field, _)| *field != "Mobile")
            .collect();

        for record in [blank_mobile, null_mobile, absent_mobile] {
            let selection = select_phone(&record, &PHONE_PRIORITY);
            let selected = selection.selected.expect("direct selected");
            assert_eq!(selected.field, "Direct");
            assert_eq!(selected.value, "+1 203-557-0353");
            let summary = selection.steps.last().expect("selection step");
            assert_eq!(summary.original, "Available: Direct, Office");
            assert_eq!(summary.action, "Selected Direct (highest priority)");
        }
    }

    #[test]
    fn no_phone_means_no_steps() {
        let selection = select_phone(&SourceRecord::new(), &PHONE_PRIORITY);
        assert!(selection.selected.is_none());
        assert!(selection.steps.is_empty());
        assert_eq!(selection.value(), "");
    }
}
