//! Import pipeline with explicit stages.
//!
//! 1. **Ingest**: read the export and profile its raw quality
//! 2. **Transform**: map, normalize and audit every record
//! 3. **Validate**: check import readiness and split valid from invalid
//! 4. **Output**: write the import file and the optional JSON report
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crm_ingest::{QualityProfile, SourceTable, profile_table, read_csv_table};
use crm_model::{OwnerAssignment, SourceRecord};
use crm_output::{
    RunReport, import_file_name, report_file_name, write_import_file, write_run_report,
};
use crm_transform::{TransformOutput, transform_records};
use crm_validate::{ValidationReport, validate_records};

use crate::logging::redact_value;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

#[derive(Debug)]
pub struct IngestResult {
    pub table: SourceTable,
    pub records: Vec<SourceRecord>,
    pub profile: QualityProfile,
}

/// Load the export and profile it.
pub fn ingest(path: &Path) -> Result<IngestResult> {
    let table = read_csv_table(path).with_context(|| format!("load {}", path.display()))?;
    let profile = profile_table(&table);
    for issue in &profile.issues {
        warn!(source = %table.source_name, "{issue}");
    }
    let records = table.records();
    Ok(IngestResult {
        table,
        records,
        profile,
    })
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

/// Transform every record; `on_progress` receives the count done so far.
pub fn transform(
    records: &[SourceRecord],
    owners: &OwnerAssignment,
    on_progress: impl FnMut(usize),
) -> TransformOutput {
    let output = transform_records(records, owners, on_progress);
    for step in output.log.iter() {
        tracing::trace!(
            field = %step.field,
            record = step.record_number(),
            original = redact_value(&step.original),
            cleaned = step.cleaned.as_deref().map(redact_value),
            action = %step.action,
            "cleaning step"
        );
    }
    output
}

// ============================================================================
// Stage 3: Validate
// ============================================================================

pub fn validate(transformed: &TransformOutput) -> ValidationReport {
    let report = validate_records(&transformed.records);
    for outcome in report.records.iter().filter(|outcome| !outcome.is_valid()) {
        debug!(
            record = outcome.index + 1,
            name = redact_value(&outcome.name),
            errors = outcome.errors().len(),
            "record excluded from import"
        );
    }
    report
}

// ============================================================================
// Stage 4: Output
// ============================================================================

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    /// Stamped into the output file names.
    pub timestamp: NaiveDateTime,
    pub write_report: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default)]
pub struct OutputResult {
    pub import_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
    /// Rows in the import file, or rows that would be written on a dry run.
    pub rows: usize,
}

/// Write the valid records and, when requested, the run report.
///
/// No import file is written when no record passed validation.
pub fn output(
    config: &OutputConfig,
    source_name: &str,
    owners: &OwnerAssignment,
    transformed: &TransformOutput,
    validation: &ValidationReport,
) -> Result<OutputResult> {
    let valid = validation.valid_records(&transformed.records);
    let mut result = OutputResult {
        rows: valid.len(),
        ..OutputResult::default()
    };
    if config.dry_run {
        debug!(rows = result.rows, "dry run, skipping file output");
        return Ok(result);
    }

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("create output dir {}", config.output_dir.display()))?;

    if !valid.is_empty() {
        let path = config.output_dir.join(import_file_name(config.timestamp));
        result.rows = write_import_file(&path, valid)
            .with_context(|| format!("write {}", path.display()))?;
        result.import_file = Some(path);
    }

    if config.write_report {
        let path = config.output_dir.join(report_file_name(config.timestamp));
        let mut report = RunReport::new(source_name, owners, &transformed.log, validation);
        if let Some(import_file) = &result.import_file {
            report = report.with_output_file(import_file);
        }
        write_run_report(&path, &report).with_context(|| format!("write {}", path.display()))?;
        result.report_file = Some(path);
    }
    Ok(result)
}
