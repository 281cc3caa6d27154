//! End-to-end tests for the transformation engine.

use crm_model::{DestinationField, OwnerAssignment, SourceRecord, StepField};
use crm_transform::{clean_domain, clean_phone, map_record, transform_records};
use proptest::prelude::*;

fn export() -> Vec<SourceRecord> {
    vec![
        SourceRecord::new()
            .with("First Name", "Benjamin")
            .with("Last Name", "Rogers")
            .with("Email", "benjamin.rogers@ayrwellness.com")
            .with("Mobile", "+1 203-451-7659")
            .with("Direct", "+1 203-557-0353")
            .with("Job Title", "CFO")
            .with("Company Name", "Ayr Wellness")
            .with("Website", "ayrwellness.com"),
        SourceRecord::new()
            .with("First Name", "Jason")
            .with("Last Name", "Wild")
            .with("Company Name", "TerrAscend")
            .with("Website", "https://www.terrascend.com/"),
    ]
}

#[test]
fn batch_output_is_index_aligned() {
    let mut progress = Vec::new();
    let output = transform_records(&export(), &OwnerAssignment::default(), |done| {
        progress.push(done);
    });
    assert_eq!(progress, vec![1, 2]);
    assert_eq!(output.records.len(), 2);
    assert_eq!(output.records[1].contact_first_name, "Jason");
    assert_eq!(output.records[1].account_domain_name, "terrascend.com");
    assert_eq!(output.records[1].contact_primary_phone_number, "");
}

#[test]
fn log_is_tagged_and_grouped() {
    let output = transform_records(&export(), &OwnerAssignment::default(), |_| {});
    assert_eq!(output.log.len(), 2);

    let groups = output.log.groups();
    assert_eq!(groups[0].field, StepField::PhoneSelection);
    assert_eq!(groups[1].field, StepField::Domain);

    let domain = groups[1].steps[0];
    assert_eq!(domain.record_number(), Some(2));
    assert_eq!(
        domain.record.as_ref().map(|tag| tag.name.as_str()),
        Some("Jason Wild")
    );
}

#[test]
fn owners_are_applied_to_every_record() {
    let owners = OwnerAssignment::new(Some("owner-1".to_string()), None);
    let output = transform_records(&export(), &owners, |_| {});
    assert!(
        output
            .records
            .iter()
            .all(|record| record.contact_owner_id == "owner-1" && record.account_owner_id.is_empty())
    );
    let owner_steps = output
        .log
        .iter()
        .filter(|step| step.field == StepField::ContactOwner)
        .count();
    assert_eq!(owner_steps, 2);
}

fn domain_input() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("http://"), Just("https://")],
        prop_oneof![Just(""), Just("www.")],
        "[a-v][a-v0-9]{0,15}",
        "[a-v]{2,6}",
        prop_oneof![Just(String::new()), "/[a-z0-9]{0,10}"],
    )
        .prop_map(|(scheme, www, label, tld, path)| format!("{scheme}{www}{label}.{tld}{path}"))
}

fn source_strategy() -> impl Strategy<Value = SourceRecord> {
    let column = prop_oneof![
        Just("First Name"),
        Just("Last Name"),
        Just("Email"),
        Just("Website"),
        Just("Mobile"),
        Just("Office"),
        Just("Notes"),
    ];
    prop::collection::vec((column, prop::option::of("[ -~]{0,20}")), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_domain_is_idempotent(input in domain_input()) {
        let once = clean_domain(&input);
        let twice = clean_domain(&once.value);
        prop_assert_eq!(&twice.value, &once.value);
        prop_assert!(twice.step.is_none());
    }

    #[test]
    fn prop_phone_output_is_clean(input in "\\PC{0,24}") {
        let cleaned = clean_phone(&input);
        let all_allowed = cleaned.value.chars().all(|c| {
            c.is_numeric() || c.is_whitespace() || "+-()".contains(c)
        });
        prop_assert!(all_allowed);
        prop_assert_eq!(clean_phone(&cleaned.value).value, cleaned.value.trim());
    }

    #[test]
    fn prop_mapped_record_has_template_shape(source in source_strategy()) {
        let mapped = map_record(&source, &OwnerAssignment::default());
        prop_assert_eq!(mapped.record.values().len(), DestinationField::ALL.len());
        let expected_first = source.value("First Name").map(str::trim).unwrap_or_default();
        prop_assert_eq!(mapped.record.contact_first_name.as_str(), expected_first);
    }
}
