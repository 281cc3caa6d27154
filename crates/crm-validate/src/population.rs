//! Fill rates of the destination fields after transformation.

use serde::Serialize;

use crm_model::{DestinationField, DestinationRecord};

use crate::checks::REQUIRED_FIELDS;

/// How strongly the import template expects a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Requirement {
    Required,
    /// Email or phone; one of the two is enough.
    EitherOr,
    Recommended,
}

impl Requirement {
    pub fn of(field: DestinationField) -> Self {
        if REQUIRED_FIELDS.contains(&field) {
            Self::Required
        } else if matches!(
            field,
            DestinationField::ContactPrimaryEmail | DestinationField::ContactPrimaryPhoneNumber
        ) {
            Self::EitherOr
        } else {
            Self::Recommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::EitherOr => "Required (Either/Or)",
            Self::Recommended => "Recommended",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldPopulation {
    pub field: DestinationField,
    pub requirement: Requirement,
    pub filled: usize,
    pub total: usize,
    /// Percentage of records with a value.
    pub fill_rate: f64,
}

impl FieldPopulation {
    /// A required field that is not filled on every record.
    pub fn needs_attention(&self) -> bool {
        self.requirement == Requirement::Required && self.filled < self.total
    }
}

/// Population of every destination field, in template order.
pub fn field_population(records: &[DestinationRecord]) -> Vec<FieldPopulation> {
    let total = records.len();
    DestinationField::ALL
        .into_iter()
        .map(|field| {
            let filled = records.iter().filter(|record| record.is_filled(field)).count();
            let fill_rate = if total == 0 {
                0.0
            } else {
                filled as f64 / total as f64 * 100.0
            };
            FieldPopulation {
                field,
                requirement: Requirement::of(field),
                filled,
                total,
                fill_rate,
            }
        })
        .collect()
}
