//! Configuration loading and the typed config structure for the board.
//!
//! The configuration is small and entirely optional: every field has a
//! default, so a board built without a file behaves sensibly. When a file is
//! used, it is YAML mirroring [`BoardConfig`].

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// Label displayed as the author of a comment whose author account no
    /// longer exists.
    #[serde(default = "default_deleted_author_label")]
    pub deleted_author_label: String,

    /// Page number the adapter should assume when the caller supplies none.
    #[serde(default = "default_page")]
    pub default_page: u64,

    /// Page size the adapter should assume when the caller supplies none.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
}

fn default_deleted_author_label() -> String {
    String::from("unknown")
}

const fn default_page() -> u64 {
    1
}

const fn default_page_size() -> u64 {
    10
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            deleted_author_label: default_deleted_author_label(),
            default_page: default_page(),
            default_page_size: default_page_size(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = BoardConfig::parse("{}").ok();
        assert_eq!(config, Some(BoardConfig::default()));
    }

    #[test]
    fn fields_override_individually() {
        let config = BoardConfig::parse("deleted_author_label: gone\n").ok();
        let config = config.unwrap_or_default();
        assert_eq!(config.deleted_author_label, "gone");
        // Untouched fields keep their defaults.
        assert_eq!(config.default_page, 1);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(BoardConfig::parse(": not yaml").is_err());
    }
}
