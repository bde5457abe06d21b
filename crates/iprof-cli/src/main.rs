//! # iprof CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use iprof_cli::profile::{run_profile, ProfileArgs};
use iprof_cli::schema::{run_schema, SchemaArgs};
use iprof_cli::validate::{run_validate, ValidateArgs};

/// Instrument profile toolkit.
///
/// Validates instrument records against the canonical instrument schema,
/// documents the schema, and assembles normalized profiles from record
/// directories.
#[derive(Parser, Debug)]
#[command(name = "iprof", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate JSON/YAML record files against the instrument schema.
    Validate(ValidateArgs),

    /// Print the instrument schema catalog.
    Schema(SchemaArgs),

    /// Assemble a normalized, validated profile for one instrument.
    Profile(ProfileArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Schema(args) => run_schema(&args),
        Commands::Profile(args) => run_profile(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
