//! JSON run report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crm_model::OwnerAssignment;
use crm_transform::CleaningLog;
use crm_validate::ValidationReport;

use crate::error::{OutputError, Result};

/// Headline numbers of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub total_records: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    pub warnings: usize,
    pub cleaning_steps: usize,
    /// Percentage of records that passed validation.
    pub success_rate: f64,
}

impl RunSummary {
    pub fn new(log: &CleaningLog, validation: &ValidationReport) -> Self {
        Self {
            total_records: validation.total(),
            valid_records: validation.valid_count(),
            invalid_records: validation.invalid_count(),
            warnings: validation.warning_count(),
            cleaning_steps: log.len(),
            success_rate: validation.success_rate(),
        }
    }
}

/// Everything a run did, for audit outside the terminal.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// RFC 3339 local time.
    pub generated_at: String,
    pub source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    pub owners: &'a OwnerAssignment,
    pub summary: RunSummary,
    pub cleaning_log: &'a CleaningLog,
    pub validation: &'a ValidationReport,
}

impl<'a> RunReport<'a> {
    pub fn new(
        source: &'a str,
        owners: &'a OwnerAssignment,
        cleaning_log: &'a CleaningLog,
        validation: &'a ValidationReport,
    ) -> Self {
        Self {
            generated_at: Local::now().to_rfc3339(),
            source,
            output_file: None,
            owners,
            summary: RunSummary::new(cleaning_log, validation),
            cleaning_log,
            validation,
        }
    }

    #[must_use]
    pub fn with_output_file(mut self, path: &Path) -> Self {
        self.output_file = Some(path.display().to_string());
        self
    }
}

/// `reevo_import_report_YYYYmmdd_HHMMSS.json`
pub fn report_file_name(timestamp: NaiveDateTime) -> String {
    format!("reevo_import_report_{}.json", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Write the report as pretty-printed JSON.
pub fn write_run_report(path: &Path, report: &RunReport<'_>) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(path = %path.display(), "wrote run report");
    Ok(())
}
