//! Data model for the HubSpot → Reevo import pipeline.
//!
//! This crate holds the types shared by every pipeline stage:
//!
//! - **Source records**: one row of the HubSpot export, keyed by column name
//! - **Destination records**: the fixed 11-column Reevo import schema
//! - **Field mapping**: the static source → destination table and phone priority
//! - **Cleaning steps**: audit entries emitted by value normalization
//! - **Issues**: tagged validation findings with severity and display text

pub mod cleaning;
pub mod destination;
pub mod error;
pub mod issue;
pub mod mapping;
pub mod owner;
pub mod source;

pub use cleaning::{CleaningStep, RecordTag, StepField};
pub use destination::{DestinationField, DestinationRecord};
pub use error::ModelError;
pub use issue::{Issue, IssueKind, Severity, display_name};
pub use mapping::{FIELD_MAPPING, FieldMapping, PHONE_PRIORITY, PhonePriority, mapped_source_fields};
pub use owner::OwnerAssignment;
pub use source::SourceRecord;
