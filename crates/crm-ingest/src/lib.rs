//! HubSpot export ingestion.
//!
//! This crate loads a HubSpot contact export into memory and profiles it
//! before transformation.
//!
//! # Features
//!
//! - **CSV Loading**: Read a delimited export with a single header row
//! - **Records**: Convert rows into [`SourceRecord`](crm_model::SourceRecord)s
//! - **Quality Profile**: Fill rates of mapped columns and contact coverage
//! - **Mapping Overview**: Column availability and sample values per mapping
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use crm_ingest::{profile_table, read_csv_table};
//!
//! let table = read_csv_table(Path::new("hubspot_export.csv"))?;
//! let profile = profile_table(&table);
//! let records = table.records();
//! ```

mod error;
mod profile;
mod reader;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{read_csv_from_reader, read_csv_table};

// === Tables ===
pub use table::SourceTable;

// === Profiling ===
pub use profile::{
    CONTACT_COVERAGE_MIN, FieldQuality, MappingAvailability, MappingOverview, PhoneAvailability,
    QualityProfile, QualityStatus, mapping_overview, profile_table,
};
