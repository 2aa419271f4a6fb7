//! `docsite check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::SiteConfiguration;
use tracing::warn;

use super::resolve_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docsite.toml, then built-in).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail when any lint is reported.
    #[arg(long)]
    pub(crate) strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Loading already enforces the structural invariants; this reports the
    /// duplicate-label and duplicate-target lints on top.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = resolve_config(self.config.as_deref())?;
        check(&config, self.strict, &output)
    }
}

fn check(config: &SiteConfiguration, strict: bool, output: &Output) -> Result<(), CliError> {
    let lints = config.lint();
    for lint in &lints {
        warn!(%lint, "lint");
        output.warning(&format!("warning: {lint}"));
    }

    let pages = config.sidebar().items().count();
    let summary = format!(
        "{}: {} nav links, {} sidebar groups, {pages} pages",
        config.title(),
        config.nav().len(),
        config.sidebar().len(),
    );

    if strict && !lints.is_empty() {
        return Err(CliError::Validation(format!(
            "{summary}: {} warning(s) in strict mode",
            lints.len()
        )));
    }

    output.success(&format!("{summary}: OK"));
    Ok(())
}
