//! Authored site content and generator hand-off for docsite.
//!
//! This crate provides:
//! - [`site_configuration`]: the documentation site's navigation, sidebar and
//!   social links
//! - [`SiteGenerator`]: the registration seam of the external generator, with
//!   [`ManifestWriter`] writing the configuration to disk
//! - [`Outline`]: a tree view for terminal display
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docsite_site::{ManifestFormat, ManifestWriter, SiteGenerator, site_configuration};
//!
//! let config = site_configuration()?;
//! let mut generator = ManifestWriter::new(".generator", ManifestFormat::Json);
//! generator.register(&config)?;
//! # Ok(())
//! # }
//! ```

mod content;
mod generator;
mod outline;

pub use content::site_configuration;
pub use generator::{GeneratorError, ManifestFormat, ManifestWriter, SiteGenerator};
pub use outline::{Outline, OutlineNode};
