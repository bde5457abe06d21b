//! # Schema Subcommand
//!
//! Prints the instrument schema catalog.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use iprof_schema::{instrument_schema, SchemaDefinition};

/// Output format for the schema catalog.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaFormat {
    /// A Markdown table, one row per field.
    #[default]
    Markdown,
    /// The serialized definition: name and ordered field rules.
    Json,
}

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = SchemaFormat::Markdown)]
    pub format: SchemaFormat,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    print!("{}", render_schema(instrument_schema(), args.format)?);
    Ok(0)
}

/// Render a schema in the requested format.
pub fn render_schema(schema: &SchemaDefinition, format: SchemaFormat) -> Result<String> {
    match format {
        SchemaFormat::Markdown => Ok(schema.to_markdown()),
        SchemaFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(schema).context("failed to serialize schema")?;
            out.push('\n');
            Ok(out)
        }
    }
}
