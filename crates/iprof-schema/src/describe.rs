//! Human-readable rendering of a schema catalog.

use std::fmt::Write;

use serde_json::Value;

use crate::definition::SchemaDefinition;

impl SchemaDefinition {
    /// Render the catalog as a Markdown table in declaration order.
    ///
    /// Columns: field, required, type, description, example. Fields
    /// without an example show `-`.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}", self.name());
        let _ = writeln!(out);
        let _ = writeln!(out, "| Field | Required | Type | Description | Example |");
        let _ = writeln!(out, "|---|---|---|---|---|");
        for rule in self.rules() {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                rule.name,
                if rule.required { "yes" } else { "no" },
                rule.expected_type,
                escape_cell(&rule.description),
                rule.example.as_ref().map_or_else(|| "-".to_string(), render_example),
            );
        }
        out
    }
}

fn render_example(value: &Value) -> String {
    match value {
        Value::String(s) => format!("`{}`", escape_cell(s)),
        other => format!("`{other}`"),
    }
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
