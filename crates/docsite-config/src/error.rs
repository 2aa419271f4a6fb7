//! Configuration error type and shared validation helpers.

use std::path::PathBuf;

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Prefix the field path of a validation error.
///
/// Constructors report paths relative to themselves (`label`, `items[2].link`);
/// parents call this to produce the full path (`sidebar[1].label`).
pub(crate) fn at(prefix: &str) -> impl FnOnce(ConfigError) -> ConfigError + '_ {
    move |err| match err {
        ConfigError::Validation(msg) => ConfigError::Validation(format!("{prefix}.{msg}")),
        other => other,
    }
}
