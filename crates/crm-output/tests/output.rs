//! Tests for the import file and run report writers.

use crm_model::{DestinationRecord, OwnerAssignment, SourceRecord};
use crm_output::{RunReport, write_import_csv, write_import_file, write_run_report};
use crm_transform::transform_records;
use crm_validate::validate_records;

fn records() -> Vec<DestinationRecord> {
    let mut rogers = DestinationRecord::new();
    rogers.contact_owner_id = "owner-1".to_string();
    rogers.contact_first_name = "Benjamin".to_string();
    rogers.contact_last_name = "Rogers".to_string();
    rogers.contact_primary_email = "benjamin.rogers@ayrwellness.com".to_string();
    rogers.contact_primary_phone_number = "+1 203-451-7659".to_string();
    rogers.contact_account_role_title = "CFO".to_string();
    rogers.account_name = "Ayr Wellness, Inc.".to_string();
    rogers.account_domain_name = "ayrwellness.com".to_string();

    let mut wild = DestinationRecord::new();
    wild.contact_first_name = "Jason".to_string();
    wild.contact_last_name = "Wild".to_string();
    wild.account_name = "TerrAscend".to_string();
    wild.account_domain_name = "terrascend.com".to_string();
    vec![rogers, wild]
}

#[test]
fn import_csv_text() {
    let mut buffer = Vec::new();
    let rows = write_import_csv(&records(), &mut buffer).expect("write csv");
    assert_eq!(rows, 2);
    let text = String::from_utf8(buffer).expect("utf-8");
    insta::assert_snapshot!(text, @r#"
    contact_owner_id,contact_first_name,contact_last_name,contact_primary_email,contact_primary_phone_number,contact_linkedin_url,contact_account_role_title,account_owner_id,account_name,account_domain_name,account_linkedin_url
    owner-1,Benjamin,Rogers,benjamin.rogers@ayrwellness.com,+1 203-451-7659,,CFO,,"Ayr Wellness, Inc.",ayrwellness.com,
    ,Jason,Wild,,,,,,TerrAscend,terrascend.com,
    "#);
}

#[test]
fn import_file_round_trips_through_csv_reader() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("import.csv");
    write_import_file(&path, &records()).expect("write file");

    let mut reader = csv::Reader::from_path(&path).expect("open import file");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.len(), 11);
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("read rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][8], "Ayr Wellness, Inc.");
}

#[test]
fn run_report_json() {
    let sources = vec![
        SourceRecord::new()
            .with("First Name", "Jason")
            .with("Last Name", "Wild")
            .with("Company Name", "TerrAscend")
            .with("Website", "https://www.terrascend.com/"),
    ];
    let owners = OwnerAssignment::default();
    let output = transform_records(&sources, &owners, |_| {});
    let validation = validate_records(&output.records);

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("report.json");
    let report = RunReport::new("export.csv", &owners, &output.log, &validation)
        .with_output_file(&dir.path().join("import.csv"));
    write_run_report(&path, &report).expect("write report");

    let text = std::fs::read_to_string(&path).expect("read report");
    let json: serde_json::Value = serde_json::from_str(&text).expect("parse report");
    assert_eq!(json["source"], "export.csv");
    assert_eq!(json["summary"]["total_records"], 1);
    assert_eq!(json["summary"]["invalid_records"], 1);
    assert_eq!(json["summary"]["cleaning_steps"], 1);
    assert_eq!(json["cleaning_log"][0]["field"], "Website → Domain");
    assert_eq!(json["cleaning_log"][0]["record"]["name"], "Jason Wild");
    assert_eq!(
        json["validation"]["records"][0]["issues"][0]["kind"],
        "missing_contact_method"
    );
}
