//! Error types for rating configuration.

use asterism_core::ColorParseError;
use thiserror::Error;

/// Error type for loading and building a rating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing or serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A color field is not a hex color
    #[error("Invalid color for '{field}': {source}")]
    InvalidColor {
        /// Field name
        field: String,
        /// Parse failure
        source: ColorParseError,
    },

    /// A field holds a value the widget cannot use
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
