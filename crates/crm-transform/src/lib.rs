//! HubSpot → Reevo transformation engine.
//!
//! Turns [`SourceRecord`](crm_model::SourceRecord)s into fixed-shape
//! [`DestinationRecord`](crm_model::DestinationRecord)s and records every value
//! it rewrites as a [`CleaningStep`](crm_model::CleaningStep).
//!
//! # Overview
//!
//! - **Normalization**: domain extraction, phone cleaning and phone selection
//! - **Field mapping**: the fixed mapping table plus owner stamping
//! - **Audit log**: cleaning steps of a whole run, tagged by record
//!
//! # Example
//!
//! ```ignore
//! use crm_transform::{FieldMapper, transform_records};
//!
//! let mapped = FieldMapper::reference().map_record(&source, &owners);
//! let output = transform_records(&sources, &owners, |_| {});
//! for group in output.log.groups() {
//!     println!("{} ({} operations)", group.field, group.steps.len());
//! }
//! ```
//!
//! # Design Principles
//!
//! - **Stateless functions**: every normalization returns its value together
//!   with the steps it produced; nothing is buffered between records
//! - **Never fail**: malformed values degrade to a best-effort cleaned value
//!   plus an audit entry

mod audit;
mod batch;
mod mapper;

pub mod normalization;

pub use audit::{CleaningLog, StepGroup};
pub use batch::{TransformOutput, transform_records};
pub use mapper::{FieldMapper, MappedRecord, map_record};
pub use normalization::{Cleaned, PhoneSelection, clean_domain, clean_phone, select_phone};
