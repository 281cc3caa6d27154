use serde::{Deserialize, Serialize};

/// Default owners stamped onto every record of a run.
///
/// Identifiers are free text and copied verbatim; blank values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerAssignment {
    #[serde(default)]
    pub contact_owner_id: Option<String>,
    #[serde(default)]
    pub account_owner_id: Option<String>,
}

impl OwnerAssignment {
    pub fn new(contact_owner_id: Option<String>, account_owner_id: Option<String>) -> Self {
        Self {
            contact_owner_id,
            account_owner_id,
        }
    }

    pub fn contact(&self) -> Option<&str> {
        non_blank(self.contact_owner_id.as_deref())
    }

    pub fn account(&self) -> Option<&str> {
        non_blank(self.account_owner_id.as_deref())
    }

    /// Fill unset owners from `fallback`, keeping values already present.
    #[must_use]
    pub fn or(self, fallback: OwnerAssignment) -> Self {
        Self {
            contact_owner_id: self.contact_owner_id.or(fallback.contact_owner_id),
            account_owner_id: self.account_owner_id.or(fallback.account_owner_id),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_owner_is_unset() {
        let owners = OwnerAssignment::new(Some("  ".to_string()), Some("acct-7".to_string()));
        assert_eq!(owners.contact(), None);
        assert_eq!(owners.account(), Some("acct-7"));
    }

    #[test]
    fn explicit_values_win_over_fallback() {
        let cli = OwnerAssignment::new(Some("cli".to_string()), None);
        let file = OwnerAssignment::new(Some("file".to_string()), Some("file-acct".to_string()));
        let merged = cli.or(file);
        assert_eq!(merged.contact(), Some("cli"));
        assert_eq!(merged.account(), Some("file-acct"));
    }
}
