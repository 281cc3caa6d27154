//! Output writers for a transformation run.
//!
//! - **Import file**: the 11-column Reevo CSV holding valid records only
//! - **Run report**: JSON summary with the cleaning log and validation details

mod error;
mod import;
mod report;

pub use error::{OutputError, Result};
pub use import::{import_file_name, write_import_csv, write_import_file};
pub use report::{RunReport, RunSummary, report_file_name, write_run_report};
