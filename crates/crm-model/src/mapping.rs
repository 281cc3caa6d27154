//! Static HubSpot → Reevo field mapping.
//!
//! The mapping is fixed by the Reevo import template. Phone numbers are not
//! part of [`FIELD_MAPPING`]: `contact_primary_phone_number` is filled from the
//! first non-blank column of [`PHONE_PRIORITY`].

use serde::Serialize;

use crate::destination::DestinationField;

/// One source column feeding one destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldMapping {
    /// HubSpot export column name.
    pub source: &'static str,
    /// Reevo template field.
    pub destination: DestinationField,
}

impl FieldMapping {
    pub const fn new(source: &'static str, destination: DestinationField) -> Self {
        Self {
            source,
            destination,
        }
    }
}

/// Phone columns, highest priority first.
pub type PhonePriority = [&'static str; 3];

/// Source → destination pairs in the order they are applied.
pub const FIELD_MAPPING: &[FieldMapping] = &[
    FieldMapping::new("First Name", DestinationField::ContactFirstName),
    FieldMapping::new("Last Name", DestinationField::ContactLastName),
    FieldMapping::new("Email", DestinationField::ContactPrimaryEmail),
    FieldMapping::new("Personal Linkedin URL", DestinationField::ContactLinkedinUrl),
    FieldMapping::new("Job Title", DestinationField::ContactAccountRoleTitle),
    FieldMapping::new("Company Name", DestinationField::AccountName),
    FieldMapping::new("Website", DestinationField::AccountDomainName),
    FieldMapping::new("Company Linkedin URL", DestinationField::AccountLinkedinUrl),
];

/// Phone selection order: the first non-blank column wins.
pub const PHONE_PRIORITY: PhonePriority = ["Mobile", "Direct", "Office"];

/// Every source column the pipeline reads, mapping order then phone priority.
pub fn mapped_source_fields() -> Vec<&'static str> {
    FIELD_MAPPING
        .iter()
        .map(|mapping| mapping.source)
        .chain(PHONE_PRIORITY)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn destinations_are_unique() {
        let unique: BTreeSet<_> = FIELD_MAPPING.iter().map(|m| m.destination).collect();
        assert_eq!(unique.len(), FIELD_MAPPING.len());
    }

    #[test]
    fn phone_and_owner_fields_are_not_table_targets() {
        for mapping in FIELD_MAPPING {
            assert_ne!(mapping.destination, DestinationField::ContactPrimaryPhoneNumber);
            assert_ne!(mapping.destination, DestinationField::ContactOwnerId);
            assert_ne!(mapping.destination, DestinationField::AccountOwnerId);
        }
    }

    #[test]
    fn source_fields_include_phones_last() {
        let fields = mapped_source_fields();
        assert_eq!(fields.len(), 11);
        assert_eq!(&fields[8..], &["Mobile", "Direct", "Office"]);
    }
}
