//! Source → destination field mapping.

use crm_model::{
    CleaningStep, DestinationField, DestinationRecord, FIELD_MAPPING, FieldMapping,
    OwnerAssignment, PHONE_PRIORITY, PhonePriority, SourceRecord, StepField,
};

use crate::normalization::{clean_domain, select_phone};

/// A mapped record and the cleaning steps produced while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRecord {
    pub record: DestinationRecord,
    /// Owner steps, then the domain step, then phone steps.
    pub steps: Vec<CleaningStep>,
}

/// Applies a mapping table and phone priority to source records.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapper {
    mapping: &'static [FieldMapping],
    phone_priority: PhonePriority,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::reference()
    }
}

impl FieldMapper {
    pub const fn new(mapping: &'static [FieldMapping], phone_priority: PhonePriority) -> Self {
        Self {
            mapping,
            phone_priority,
        }
    }

    /// The HubSpot → Reevo mapping.
    pub const fn reference() -> Self {
        Self::new(FIELD_MAPPING, PHONE_PRIORITY)
    }

    pub fn mapping(&self) -> &'static [FieldMapping] {
        self.mapping
    }

    pub fn phone_priority(&self) -> &PhonePriority {
        &self.phone_priority
    }

    /// Build the destination record for one source row.
    ///
    /// Mapped values are trimmed; absent or null source columns leave the
    /// destination field empty. The website is reduced to a domain and the
    /// primary phone is chosen by priority.
    pub fn map_record(&self, source: &SourceRecord, owners: &OwnerAssignment) -> MappedRecord {
        let mut record = DestinationRecord::new();
        let mut steps = Vec::new();

        if let Some(owner) = owners.contact() {
            record.set(DestinationField::ContactOwnerId, owner);
            steps.push(owner_step(StepField::ContactOwner, owner, "contact"));
        }
        if let Some(owner) = owners.account() {
            record.set(DestinationField::AccountOwnerId, owner);
            steps.push(owner_step(StepField::AccountOwner, owner, "account"));
        }

        for mapping in self.mapping {
            let Some(value) = source.value(mapping.source) else {
                continue;
            };
            let value = value.trim();
            if mapping.destination == DestinationField::AccountDomainName {
                let cleaned = clean_domain(value);
                steps.extend(cleaned.step);
                record.set(mapping.destination, cleaned.value);
            } else {
                record.set(mapping.destination, value);
            }
        }

        let phone = select_phone(source, &self.phone_priority);
        if let Some(selected) = &phone.selected {
            record.set(
                DestinationField::ContactPrimaryPhoneNumber,
                selected.value.as_str(),
            );
        }
        steps.extend(phone.steps);

        MappedRecord { record, steps }
    }
}

fn owner_step(field: StepField, owner: &str, kind: &str) -> CleaningStep {
    CleaningStep::new(
        field,
        "Empty",
        Some(owner.to_string()),
        format!("Set default {kind} owner"),
    )
}

/// Map one record with the reference mapping.
pub fn map_record(source: &SourceRecord, owners: &OwnerAssignment) -> MappedRecord {
    FieldMapper::reference().map_record(source, owners)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rogers() -> SourceRecord {
        SourceRecord::new()
            .with("First Name", "Benjamin")
            .with("Last Name", "Rogers")
            .with("Email", "benjamin.rogers@ayrwellness.com")
            .with("Mobile", "+1 203-451-7659")
            .with("Direct", "+1 203-557-0353")
            .with("Company Name", "Ayr Wellness")
            .with("Website", "ayrwellness.com")
    }

    #[test]
    fn maps_fields_and_selects_mobile() {
        let mapped = map_record(&rogers(), &OwnerAssignment::default());
        let record = &mapped.record;
        assert_eq!(record.contact_first_name, "Benjamin");
        assert_eq!(record.contact_primary_email, "benjamin.rogers@ayrwellness.com");
        assert_eq!(record.contact_primary_phone_number, "+1 203-451-7659");
        assert_eq!(record.account_domain_name, "ayrwellness.com");
        assert_eq!(record.contact_owner_id, "");
        assert_eq!(mapped.steps.len(), 1);
        assert_eq!(mapped.steps[0].field, StepField::PhoneSelection);
    }

    #[test]
    fn owners_are_stamped_first() {
        let owners = OwnerAssignment::new(Some("u-1".to_string()), Some("u-2".to_string()));
        let source = SourceRecord::new()
            .with("First Name", "Jason")
            .with("Website", "https://www.terrascend.com/");
        let mapped = map_record(&source, &owners);
        assert_eq!(mapped.record.contact_owner_id, "u-1");
        assert_eq!(mapped.record.account_owner_id, "u-2");

        let fields: Vec<StepField> = mapped.steps.iter().map(|step| step.field).collect();
        assert_eq!(
            fields,
            vec![StepField::ContactOwner, StepField::AccountOwner, StepField::Domain]
        );
        assert_eq!(mapped.steps[0].original, "Empty");
        assert_eq!(mapped.steps[0].action, "Set default contact owner");
        assert_eq!(mapped.steps[1].action, "Set default account owner");
    }

    #[test]
    fn values_are_trimmed_and_nulls_stay_empty() {
        let mut source = SourceRecord::new().with("Job Title", "  CFO ");
        source.insert("Email", None);
        let mapped = map_record(&source, &OwnerAssignment::default());
        assert_eq!(mapped.record.contact_account_role_title, "CFO");
        assert_eq!(mapped.record.contact_primary_email, "");
        assert!(mapped.steps.is_empty());
    }

    #[test]
    fn unknown_columns_are_ignored() {
        let source = SourceRecord::new().with("Profile ID", "42");
        let mapped = map_record(&source, &OwnerAssignment::default());
        assert_eq!(mapped.record, DestinationRecord::new());
    }
}
