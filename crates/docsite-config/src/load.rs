//! Loading and serializing site configurations.
//!
//! A configuration can be authored as `docsite.toml` instead of in code. The
//! file uses the same keys the generator receives:
//!
//! ```toml
//! title = "Docs"
//! icon = "/logo.svg"
//!
//! [[nav]]
//! text = "Home"
//! link = "/"
//!
//! [[sidebar]]
//! text = "Guide"
//! items = [{ text = "Introduction", link = "/guide/introduction" }]
//!
//! [[socialLinks]]
//! icon = "github"
//! link = "https://github.com/example/docs"
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{ConfigError, SiteConfiguration};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "docsite.toml";

impl SiteConfiguration {
    /// Load a configuration file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `docsite.toml` in the current directory and its parents. Returns
    /// `Ok(None)` when nothing is found so callers can fall back to a built-in
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path).map(Some);
        }

        let Ok(cwd) = std::env::current_dir() else {
            return Ok(None);
        };
        match discover_config(&cwd) {
            Some(discovered) => Self::load_from_file(&discovered).map(Some),
            None => {
                debug!(start = %cwd.display(), "no {CONFIG_FILENAME} found");
                Ok(None)
            }
        }
    }

    /// Load configuration from a specific file.
    ///
    /// Files with a `.json` extension (any case) are parsed as JSON, everything else as
    /// TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        info!(
            path = %path.display(),
            groups = config.sidebar().len(),
            "loaded site configuration"
        );
        Ok(config)
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or invalid values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON or invalid values.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize as TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if TOML serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if JSON serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Search for config file in `start` and its parents.
pub(crate) fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "discovered configuration");
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
