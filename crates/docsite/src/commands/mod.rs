//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod show;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use show::ShowArgs;

use std::path::Path;

use docsite_config::SiteConfiguration;
use docsite_site::site_configuration;
use tracing::debug;

use crate::error::CliError;

/// Load the configuration from `config_path` or a discovered `docsite.toml`,
/// falling back to the built-in site configuration.
pub(crate) fn resolve_config(config_path: Option<&Path>) -> Result<SiteConfiguration, CliError> {
    if let Some(config) = SiteConfiguration::load(config_path)? {
        return Ok(config);
    }
    debug!("using built-in site configuration");
    Ok(site_configuration()?)
}
