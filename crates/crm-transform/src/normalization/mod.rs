//! Value normalization functions.
//!
//! - **domain**: website URL → bare lowercase domain
//! - **phone**: character cleanup and priority-based selection

pub mod domain;
pub mod phone;

pub use domain::clean_domain;
pub use phone::{PhoneSelection, SelectedPhone, clean_phone, select_phone};

use crm_model::CleaningStep;

/// A normalized value and the audit entry describing the change, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub value: String,
    pub step: Option<CleaningStep>,
}

impl Cleaned {
    pub(crate) fn unchanged(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            step: None,
        }
    }

    pub(crate) fn changed(value: String, step: CleaningStep) -> Self {
        Self {
            value,
            step: Some(step),
        }
    }

    /// Returns true when the normalizer rewrote the input.
    pub fn is_changed(&self) -> bool {
        self.step.is_some()
    }
}
