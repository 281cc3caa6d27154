//! Import readiness validation for Reevo records.
//!
//! - **Required fields**: first name, last name, company name and domain
//! - **Contact method**: email or phone must be present
//! - **Email format**: `local@domain.tld`
//! - **LinkedIn plausibility**: warns when a LinkedIn URL does not point at
//!   linkedin.com
//!
//! Errors exclude a record from the import file; warnings do not.
//!
//! # Example
//!
//! ```ignore
//! use crm_validate::validate_records;
//!
//! let report = validate_records(&records);
//! for group in report.error_groups() {
//!     println!("{} ({} records)", group.kind.description(), group.issues.len());
//! }
//! let importable = report.valid_records(&records);
//! ```

mod checks;
mod population;
mod report;

pub use checks::{REQUIRED_FIELDS, is_valid_email, validate_record};
pub use population::{FieldPopulation, Requirement, field_population};
pub use report::{IssueGroup, RecordValidation, ValidationReport, validate_records};
