//! docsite CLI - documentation site configuration.
//!
//! Provides commands for:
//! - `export`: Hand the site configuration to the generator as a manifest
//! - `check`: Validate the configuration and report authoring lints
//! - `show`: Print the navigation and sidebar outline (tree or JSON)

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, ShowArgs};
use output::Output;

/// docsite - Documentation site configuration.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the site configuration manifest for the generator.
    Export(ExportArgs),
    /// Validate the site configuration.
    Check(CheckArgs),
    /// Print the navigation and sidebar outline.
    Show(ShowArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Export(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::Show(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::export::FormatArg;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::try_parse_from(["docsite", "export"]).unwrap();
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, FormatArg::Json);
    }

    #[test]
    fn test_parse_export_toml_to_dir() {
        let cli =
            Cli::try_parse_from(["docsite", "export", "--format", "toml", "-o", "out"]).unwrap();
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, FormatArg::Toml);
        assert_eq!(args.output_dir, Some(std::path::PathBuf::from("out")));
    }

    #[test]
    fn test_parse_export_long_output_flag() {
        let cli = Cli::try_parse_from(["docsite", "export", "--output", "site"]).unwrap();
        let Commands::Export(args) = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.output_dir, Some(std::path::PathBuf::from("site")));
    }

    #[test]
    fn test_parse_show_json() {
        let cli = Cli::try_parse_from(["docsite", "show", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Show(ref args) if args.json));
    }

    #[test]
    fn test_parse_global_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["docsite", "check", "--strict", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(ref args) if args.strict));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["docsite", "export", "--format", "yaml"]).is_err());
    }
}
