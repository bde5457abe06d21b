//! # Profile Subcommand
//!
//! Assembles one instrument profile from a directory of record files and
//! prints the normalized record as pretty JSON.
//!
//! ```bash
//! iprof profile AAPL --data-dir ./records
//! iprof profile US0378331005 --data-dir ./vendor-a --data-dir ./vendor-b --source vendor-b
//! ```
//!
//! Each `--data-dir` becomes a source named after the directory's last
//! path component. Sources are tried in the order given.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use iprof_core::Record;
use iprof_profile::{DirectorySource, ProfileAssembler};

/// Arguments for the profile subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Instrument identifier (ISIN, ticker, ...). Also the record file stem.
    pub identifier: String,

    /// Directory holding `<IDENTIFIER>.json|yaml|yml` record files.
    #[arg(long = "data-dir", required = true)]
    pub data_dirs: Vec<PathBuf>,

    /// Consult only the source with this name.
    #[arg(long)]
    pub source: Option<String>,
}

/// Execute the profile subcommand.
pub fn run_profile(args: &ProfileArgs) -> Result<u8> {
    let profile = assemble(args)?;
    let json = serde_json::to_string_pretty(&profile).context("failed to serialize profile")?;
    println!("{json}");
    Ok(0)
}

/// Build the assembler from the arguments and fetch the profile.
pub fn assemble(args: &ProfileArgs) -> Result<Record> {
    let assembler = args
        .data_dirs
        .iter()
        .fold(ProfileAssembler::new(), |assembler, dir| {
            assembler.with_source(DirectorySource::new(source_name(dir), dir.clone()))
        });
    tracing::debug!(sources = ?assembler.source_names(), "profile sources configured");

    assembler
        .get_instrument_profile(&args.identifier, args.source.as_deref())
        .with_context(|| format!("failed to assemble profile for '{}'", args.identifier))
}

fn source_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
