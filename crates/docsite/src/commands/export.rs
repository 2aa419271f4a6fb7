//! `docsite export` command implementation.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use docsite_config::SiteConfiguration;
use docsite_site::{ManifestFormat, ManifestWriter, SiteGenerator};

use super::resolve_config;
use crate::error::CliError;
use crate::output::Output;

/// Manifest format argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    #[default]
    Json,
    Toml,
}

impl From<FormatArg> for ManifestFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Toml => Self::Toml,
        }
    }
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Path to configuration file (default: auto-discover docsite.toml, then built-in).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Manifest format.
    #[arg(short, long, value_enum, default_value_t)]
    pub(crate) format: FormatArg,

    /// Directory to write the manifest into (default: print to stdout).
    #[arg(short, long = "output", value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = resolve_config(self.config.as_deref())?;
        export(
            &config,
            ManifestFormat::from(self.format),
            self.output_dir.as_deref(),
            &output,
        )?;
        Ok(())
    }
}

/// Print the manifest, or hand it to a [`ManifestWriter`] when `output_dir`
/// is set. Returns the written path, if any.
fn export(
    config: &SiteConfiguration,
    format: ManifestFormat,
    output_dir: Option<&Path>,
    output: &Output,
) -> Result<Option<PathBuf>, CliError> {
    let Some(dir) = output_dir else {
        output.result(&format.render(config)?)?;
        return Ok(None);
    };

    output.info(&format!("Exporting '{}'", config.title()));
    let mut writer = ManifestWriter::new(dir, format);
    writer.register(config)?;

    let path = writer.path();
    output.success(&format!("Wrote {}", path.display()));
    Ok(Some(path))
}
