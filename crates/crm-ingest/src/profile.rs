//! Raw data-quality profiling of an export.
//!
//! Runs before any transformation and only reads the table, so a poor
//! profile never blocks a run; it tells the operator what to expect.

use serde::Serialize;

use crm_model::{DestinationField, FIELD_MAPPING, PHONE_PRIORITY, mapped_source_fields};

use crate::table::SourceTable;

/// Minimum share (percent) of rows that should carry an email or phone.
pub const CONTACT_COVERAGE_MIN: f64 = 90.0;

const GOOD_FILL_RATE: f64 = 80.0;
const REVIEW_FILL_RATE: f64 = 50.0;
const SAMPLE_COUNT: usize = 2;
const SAMPLE_MAX_CHARS: usize = 30;

/// Fill-rate classification of a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualityStatus {
    Good,
    NeedsReview,
    Poor,
    /// Column absent from the export.
    Missing,
}

impl QualityStatus {
    fn from_fill_rate(rate: f64) -> Self {
        if rate >= GOOD_FILL_RATE {
            Self::Good
        } else if rate >= REVIEW_FILL_RATE {
            Self::NeedsReview
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::NeedsReview => "Needs Review",
            Self::Poor => "Poor",
            Self::Missing => "Missing",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldQuality {
    pub field: &'static str,
    pub filled: usize,
    pub empty: usize,
    /// Percentage of rows with a value.
    pub fill_rate: f64,
    pub status: QualityStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityProfile {
    pub total_records: usize,
    pub total_columns: usize,
    /// Mapped columns first, then phone columns in priority order.
    pub fields: Vec<FieldQuality>,
    /// Mapped source columns absent from the header.
    pub missing_fields: Vec<&'static str>,
    /// Percentage of rows with an email or any phone column filled.
    pub contact_coverage: f64,
    /// Human-readable findings; empty when the export looks good.
    pub issues: Vec<String>,
}

impl QualityProfile {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Profile the columns the pipeline reads.
pub fn profile_table(table: &SourceTable) -> QualityProfile {
    let total = table.len();
    let fields: Vec<FieldQuality> = mapped_source_fields()
        .into_iter()
        .map(|field| {
            if !table.has_column(field) {
                return FieldQuality {
                    field,
                    filled: 0,
                    empty: total,
                    fill_rate: 0.0,
                    status: QualityStatus::Missing,
                };
            }
            let filled = table.filled_count(field);
            let fill_rate = percent(filled, total);
            FieldQuality {
                field,
                filled,
                empty: total - filled,
                fill_rate,
                status: QualityStatus::from_fill_rate(fill_rate),
            }
        })
        .collect();

    let missing_fields: Vec<&'static str> = FIELD_MAPPING
        .iter()
        .map(|mapping| mapping.source)
        .filter(|source| !table.has_column(source))
        .collect();

    let contact_coverage = percent(count_contactable(table), total);

    let mut issues = Vec::new();
    if !missing_fields.is_empty() {
        issues.push(format!("Missing fields: {}", missing_fields.join(", ")));
    }
    if total > 0 && contact_coverage < CONTACT_COVERAGE_MIN {
        issues.push(format!(
            "Only {contact_coverage:.1}% of records have email OR phone"
        ));
    }

    tracing::debug!(
        records = total,
        missing = missing_fields.len(),
        contact_coverage,
        "profiled export"
    );

    QualityProfile {
        total_records: total,
        total_columns: table.column_count(),
        fields,
        missing_fields,
        contact_coverage,
        issues,
    }
}

fn count_contactable(table: &SourceTable) -> usize {
    let columns: Vec<Vec<Option<&str>>> = std::iter::once("Email")
        .chain(PHONE_PRIORITY)
        .filter_map(|name| table.column(name))
        .collect();
    (0..table.len())
        .filter(|&row| columns.iter().any(|column| column[row].is_some()))
        .count()
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Availability of one mapping pair in the export.
#[derive(Debug, Clone, Serialize)]
pub struct MappingAvailability {
    pub source: &'static str,
    pub destination: DestinationField,
    pub available: bool,
    pub filled: usize,
    /// Up to two values, each cut at 30 characters.
    pub samples: Vec<String>,
}

/// Availability of one phone column.
#[derive(Debug, Clone, Serialize)]
pub struct PhoneAvailability {
    /// 1 is the highest priority.
    pub priority: usize,
    pub field: &'static str,
    pub available: bool,
    pub filled: usize,
    pub samples: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MappingOverview {
    pub total_records: usize,
    pub mappings: Vec<MappingAvailability>,
    pub phones: Vec<PhoneAvailability>,
}

/// How the fixed mapping lines up with the columns of this export.
pub fn mapping_overview(table: &SourceTable) -> MappingOverview {
    let mappings = FIELD_MAPPING
        .iter()
        .map(|mapping| MappingAvailability {
            source: mapping.source,
            destination: mapping.destination,
            available: table.has_column(mapping.source),
            filled: table.filled_count(mapping.source),
            samples: samples(table, mapping.source)
                .into_iter()
                .map(|value| truncate_sample(&value))
                .collect(),
        })
        .collect();
    let phones = PHONE_PRIORITY
        .into_iter()
        .enumerate()
        .map(|(idx, field)| PhoneAvailability {
            priority: idx + 1,
            field,
            available: table.has_column(field),
            filled: table.filled_count(field),
            samples: samples(table, field),
        })
        .collect();
    MappingOverview {
        total_records: table.len(),
        mappings,
        phones,
    }
}

fn samples(table: &SourceTable, field: &str) -> Vec<String> {
    table
        .column(field)
        .map(|values| {
            values
                .into_iter()
                .flatten()
                .take(SAMPLE_COUNT)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn truncate_sample(value: &str) -> String {
    if value.chars().count() > SAMPLE_MAX_CHARS {
        let head: String = value.chars().take(SAMPLE_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}
