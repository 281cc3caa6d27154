//! Optional TOML run configuration.
//!
//! ```toml
//! contact_owner_id = "usr_123"
//! account_owner_id = "usr_456"
//! output_dir = "exports"
//! ```
//!
//! Command-line flags take precedence over every value in the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crm_model::OwnerAssignment;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub contact_owner_id: Option<String>,
    pub account_owner_id: Option<String>,
    /// Directory for the import file and report.
    pub output_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded run config");
        Ok(config)
    }

    pub fn owners(&self) -> OwnerAssignment {
        OwnerAssignment::new(self.contact_owner_id.clone(), self.account_owner_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_leaves_other_values_unset() {
        let config: RunConfig = toml::from_str("account_owner_id = \"usr_9\"").expect("parse");
        assert_eq!(config.owners().account(), Some("usr_9"));
        assert_eq!(config.owners().contact(), None);
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<RunConfig, _> = toml::from_str("owner = \"x\"");
        assert!(result.is_err());
    }
}
