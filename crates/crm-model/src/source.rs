//! One row of the HubSpot export.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A source row keyed by its original column name.
///
/// Values are `None` when the cell was empty in the export. Columns that the
/// mapping does not know about are carried along and ignored downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRecord {
    fields: BTreeMap<String, Option<String>>,
}

impl SourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a non-null value.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, Some(value.into()));
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Option<String>) {
        self.fields.insert(field.into(), value);
    }

    /// Value of a present, non-null field (not trimmed).
    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|value| value.as_deref())
    }

    /// Returns true if the column exists in the row, even when null.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Value of a present field that is non-blank after trimming.
    pub fn non_blank(&self, field: &str) -> Option<&str> {
        self.value(field).filter(|value| !value.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_deref()))
    }

    /// `"<First Name> <Last Name>"` used to label audit entries.
    ///
    /// A missing first name is shown as `Unknown`.
    pub fn display_name(&self) -> String {
        let first = self.value("First Name").unwrap_or("Unknown");
        let last = self.value("Last Name").unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for SourceRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.map(Into::into)))
            .collect();
        Self { fields }
    }
}
