//! `docsite show` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::SiteConfiguration;
use docsite_site::Outline;

use super::resolve_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Path to configuration file (default: auto-discover docsite.toml, then built-in).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the outline as JSON instead of an indented tree.
    #[arg(long)]
    pub(crate) json: bool,
}

impl ShowArgs {
    /// Execute the show command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = resolve_config(self.config.as_deref())?;
        show(&config, self.json, &output)?;
        Ok(())
    }
}

/// Print the outline and return the printed lines.
fn show(config: &SiteConfiguration, json: bool, output: &Output) -> Result<Vec<String>, CliError> {
    let outline = Outline::from(config);

    if json {
        let rendered = serde_json::to_string_pretty(&outline)?;
        output.result(&rendered)?;
        return Ok(vec![rendered]);
    }

    let lines = outline.lines();
    let mut iter = lines.iter();
    if let Some(title) = iter.next() {
        output.result_highlight(title)?;
    }
    for line in iter {
        output.result(line)?;
    }
    Ok(lines)
}
