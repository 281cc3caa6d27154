//! Tests for crm-model types.

use crm_model::{
    CleaningStep, DestinationField, DestinationRecord, ModelError, SourceRecord, StepField,
};

#[test]
fn destination_record_has_eleven_empty_fields() {
    let record = DestinationRecord::new();
    let values = record.values();
    assert_eq!(values.len(), 11);
    assert!(values.iter().all(|value| value.is_empty()));
}

#[test]
fn destination_record_serializes_in_template_order() {
    let mut record = DestinationRecord::new();
    record.set(DestinationField::AccountName, "Ayr Wellness");
    let json = serde_json::to_string(&record).expect("serialize record");
    let keys: Vec<&str> = DestinationField::headers().to_vec();
    let mut last = 0usize;
    for key in keys {
        let position = json.find(&format!("\"{key}\"")).expect("key present");
        assert!(position >= last, "{key} out of order");
        last = position;
    }
}

#[test]
fn get_and_set_cover_every_field() {
    let mut record = DestinationRecord::new();
    for field in DestinationField::ALL {
        record.set(field, field.as_str());
    }
    for field in DestinationField::ALL {
        assert_eq!(record.get(field), field.as_str());
        assert!(record.is_filled(field));
    }
}

#[test]
fn field_parses_from_column_name() {
    let field: DestinationField = "account_domain_name".parse().expect("parse field");
    assert_eq!(field, DestinationField::AccountDomainName);
    let err = "domain".parse::<DestinationField>().unwrap_err();
    assert_eq!(err, ModelError::UnknownField("domain".to_string()));
}

#[test]
fn source_record_distinguishes_null_and_absent() {
    let mut record = SourceRecord::new().with("First Name", "Benjamin");
    record.insert("Mobile", None);
    assert_eq!(record.value("First Name"), Some("Benjamin"));
    assert!(record.contains("Mobile"));
    assert_eq!(record.value("Mobile"), None);
    assert!(!record.contains("Direct"));
}

#[test]
fn source_display_name_defaults_first_name() {
    let record = SourceRecord::new().with("Last Name", "Rogers");
    assert_eq!(record.display_name(), "Unknown Rogers");
    let record = SourceRecord::new()
        .with("First Name", "Benjamin")
        .with("Last Name", "Rogers");
    assert_eq!(record.display_name(), "Benjamin Rogers");
}

#[test]
fn cleaning_step_serializes_label_and_tag() {
    let step = CleaningStep::new(
        StepField::Domain,
        "https://www.terrascend.com/",
        Some("terrascend.com".to_string()),
        "Extract domain, Remove www/protocols",
    )
    .tagged(2, "Jason Wild");
    assert_eq!(step.record_number(), Some(3));
    let json = serde_json::to_value(&step).expect("serialize step");
    assert_eq!(json["field"], "Website → Domain");
    assert_eq!(json["record"]["index"], 2);
    assert_eq!(json["record"]["name"], "Jason Wild");
}
