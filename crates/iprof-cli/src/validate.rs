//! # Validate Subcommand
//!
//! ```bash
//! iprof validate records/AAPL.json records/UST29.yaml
//! iprof validate --format json records/*.json
//! ```
//!
//! Every file gets a report, including files that cannot be loaded. Exit
//! code 0 when every file loads and conforms, 1 otherwise.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use iprof_profile::load_record;
use iprof_schema::{instrument_schema, ValidationReport};

/// Output format for validation results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One status line per file, followed by its errors.
    #[default]
    Text,
    /// A JSON array of `{file, valid, errors}` objects, with `load_error`
    /// added for files that did not load.
    Json,
}

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Record files to validate (`.json`, `.yaml`, `.yml`).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Validation outcome for one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path as given on the command line.
    pub file: String,
    /// Verdict and messages. `valid` is false when the file did not load.
    #[serde(flatten)]
    pub report: ValidationReport,
    /// Why the file could not be loaded, if it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let reports = validate_files(&args.files);
    print!("{}", render_reports(&reports, args.format)?);

    let failed = reports.iter().filter(|r| !r.report.valid).count();
    tracing::info!(files = reports.len(), failed, "validation finished");
    Ok(if failed == 0 { 0 } else { 1 })
}

/// Load and validate each file in order.
pub fn validate_files(files: &[PathBuf]) -> Vec<FileReport> {
    files.iter().map(|path| validate_file(path)).collect()
}

fn validate_file(path: &Path) -> FileReport {
    let file = path.display().to_string();
    match load_record(path) {
        Ok(record) => FileReport {
            file,
            report: instrument_schema().validate(&record).report(),
            load_error: None,
        },
        Err(e) => {
            tracing::warn!(file = %file, error = %e, "failed to load record");
            FileReport {
                file,
                report: ValidationReport {
                    valid: false,
                    errors: Vec::new(),
                },
                load_error: Some(e.to_string()),
            }
        }
    }
}

/// Render reports in the requested format.
pub fn render_reports(reports: &[FileReport], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => {
            let mut out = serde_json::to_string_pretty(reports)
                .context("failed to serialize validation reports")?;
            out.push('\n');
            Ok(out)
        }
        ReportFormat::Text => {
            let mut out = String::new();
            for r in reports {
                if let Some(e) = &r.load_error {
                    out.push_str(&format!("{}: ERROR\n  - {e}\n", r.file));
                    continue;
                }
                let status = if r.report.valid { "OK" } else { "FAILED" };
                out.push_str(&format!("{}: {status}\n", r.file));
                for e in &r.report.errors {
                    out.push_str(&format!("  - {e}\n"));
                }
            }
            Ok(out)
        }
    }
}
