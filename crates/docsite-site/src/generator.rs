//! Hand-off of a configuration to the static-site generator.
//!
//! The generator consumes one configuration value at build time. Anything that
//! accepts it implements [`SiteGenerator`]; [`ManifestWriter`] is the
//! implementation used by the CLI, writing the configuration into the
//! generator's config directory.

use std::path::{Path, PathBuf};

use docsite_config::{ConfigError, SiteConfiguration};
use tracing::info;

/// Configuration-registration entry point of a site generator.
pub trait SiteGenerator {
    /// Error returned when registration fails.
    type Error: std::error::Error;

    /// Register the site configuration. Called once per build.
    fn register(&mut self, config: &SiteConfiguration) -> Result<(), Self::Error>;
}

/// Serialization format of a written manifest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ManifestFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// TOML, loadable again as `docsite.toml`.
    Toml,
}

impl ManifestFormat {
    /// File extension without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Serialize a configuration in this format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn render(self, config: &SiteConfiguration) -> Result<String, ConfigError> {
        match self {
            Self::Json => config.to_json_string(),
            Self::Toml => config.to_toml_string(),
        }
    }
}

/// Error returned when writing a manifest fails.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Serialization failed.
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// I/O error writing the manifest.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Manifest path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Writes the configuration as `config.<ext>` into a directory.
#[derive(Debug)]
pub struct ManifestWriter {
    dir: PathBuf,
    format: ManifestFormat,
}

impl ManifestWriter {
    /// Manifest file stem.
    const FILE_STEM: &'static str = "config";

    /// Create a writer targeting `dir`. The directory is created on register.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, format: ManifestFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    /// Output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}", Self::FILE_STEM, self.format.extension()))
    }
}

impl SiteGenerator for ManifestWriter {
    type Error = GeneratorError;

    fn register(&mut self, config: &SiteConfiguration) -> Result<(), Self::Error> {
        let content = self.format.render(config)?;
        let path = self.path();

        std::fs::create_dir_all(&self.dir).map_err(|source| GeneratorError::Io {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, content).map_err(|source| GeneratorError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), title = config.title(), "wrote site manifest");
        Ok(())
    }
}
