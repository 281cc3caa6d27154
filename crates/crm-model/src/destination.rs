//! The fixed Reevo import schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One column of the Reevo import template.
///
/// Variants are declared in template order; [`DestinationField::ALL`] is the
/// header row of the import file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationField {
    ContactOwnerId,
    ContactFirstName,
    ContactLastName,
    ContactPrimaryEmail,
    ContactPrimaryPhoneNumber,
    ContactLinkedinUrl,
    ContactAccountRoleTitle,
    AccountOwnerId,
    AccountName,
    AccountDomainName,
    AccountLinkedinUrl,
}

impl DestinationField {
    /// All fields in template order.
    pub const ALL: [DestinationField; 11] = [
        Self::ContactOwnerId,
        Self::ContactFirstName,
        Self::ContactLastName,
        Self::ContactPrimaryEmail,
        Self::ContactPrimaryPhoneNumber,
        Self::ContactLinkedinUrl,
        Self::ContactAccountRoleTitle,
        Self::AccountOwnerId,
        Self::AccountName,
        Self::AccountDomainName,
        Self::AccountLinkedinUrl,
    ];

    /// Column name in the import file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContactOwnerId => "contact_owner_id",
            Self::ContactFirstName => "contact_first_name",
            Self::ContactLastName => "contact_last_name",
            Self::ContactPrimaryEmail => "contact_primary_email",
            Self::ContactPrimaryPhoneNumber => "contact_primary_phone_number",
            Self::ContactLinkedinUrl => "contact_linkedin_url",
            Self::ContactAccountRoleTitle => "contact_account_role_title",
            Self::AccountOwnerId => "account_owner_id",
            Self::AccountName => "account_name",
            Self::AccountDomainName => "account_domain_name",
            Self::AccountLinkedinUrl => "account_linkedin_url",
        }
    }

    /// Header row of the import file.
    pub fn headers() -> [&'static str; 11] {
        Self::ALL.map(|field| field.as_str())
    }
}

impl fmt::Display for DestinationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownField(trimmed.to_string()))
    }
}

/// A record shaped for the Reevo import template.
///
/// Every field is always present; unset fields hold the empty string.
/// Field declaration order matches [`DestinationField::ALL`], so the derived
/// `Serialize` writes columns in template order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub contact_owner_id: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
    pub contact_primary_email: String,
    pub contact_primary_phone_number: String,
    pub contact_linkedin_url: String,
    pub contact_account_role_title: String,
    pub account_owner_id: String,
    pub account_name: String,
    pub account_domain_name: String,
    pub account_linkedin_url: String,
}

impl DestinationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DestinationField) -> &str {
        match field {
            DestinationField::ContactOwnerId => &self.contact_owner_id,
            DestinationField::ContactFirstName => &self.contact_first_name,
            DestinationField::ContactLastName => &self.contact_last_name,
            DestinationField::ContactPrimaryEmail => &self.contact_primary_email,
            DestinationField::ContactPrimaryPhoneNumber => &self.contact_primary_phone_number,
            DestinationField::ContactLinkedinUrl => &self.contact_linkedin_url,
            DestinationField::ContactAccountRoleTitle => &self.contact_account_role_title,
            DestinationField::AccountOwnerId => &self.account_owner_id,
            DestinationField::AccountName => &self.account_name,
            DestinationField::AccountDomainName => &self.account_domain_name,
            DestinationField::AccountLinkedinUrl => &self.account_linkedin_url,
        }
    }

    pub fn set(&mut self, field: DestinationField, value: impl Into<String>) {
        let slot = match field {
            DestinationField::ContactOwnerId => &mut self.contact_owner_id,
            DestinationField::ContactFirstName => &mut self.contact_first_name,
            DestinationField::ContactLastName => &mut self.contact_last_name,
            DestinationField::ContactPrimaryEmail => &mut self.contact_primary_email,
            DestinationField::ContactPrimaryPhoneNumber => &mut self.contact_primary_phone_number,
            DestinationField::ContactLinkedinUrl => &mut self.contact_linkedin_url,
            DestinationField::ContactAccountRoleTitle => &mut self.contact_account_role_title,
            DestinationField::AccountOwnerId => &mut self.account_owner_id,
            DestinationField::AccountName => &mut self.account_name,
            DestinationField::AccountDomainName => &mut self.account_domain_name,
            DestinationField::AccountLinkedinUrl => &mut self.account_linkedin_url,
        };
        *slot = value.into();
    }

    /// Returns true when the field holds a non-blank value.
    pub fn is_filled(&self, field: DestinationField) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Field values in template order.
    pub fn values(&self) -> [&str; 11] {
        DestinationField::ALL.map(|field| self.get(field))
    }

    /// `"<first> <last>"` as shown in validation listings.
    pub fn display_name(&self) -> String {
        let first = if self.contact_first_name.is_empty() {
            "Unknown"
        } else {
            self.contact_first_name.as_str()
        };
        format!("{first} {}", self.contact_last_name)
            .trim_end()
            .to_string()
    }
}
