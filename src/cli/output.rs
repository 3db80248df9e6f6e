//! CLI output: error mapping and result formatting for the CLI surface.

use crate::cli::route::PropertyRow;
use crate::error::SettingsError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Map domain/service errors to a string for CLI output.
/// Keeps route handlers thin; extend with stable categories if needed.
pub fn map_error(e: &SettingsError) -> String {
    e.to_string()
}

pub fn format_show(rows: &[PropertyRow], format: &str) -> Result<String, SettingsError> {
    if format == "json" {
        let arr: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "name": row.name,
                    "stored": row.stored,
                    "effective": row.effective,
                    "source": source_label(row),
                })
            })
            .collect();
        serde_json::to_string_pretty(&serde_json::json!({ "properties": arr }))
            .map_err(|e| SettingsError::ConfigError(e.to_string()))
    } else {
        Ok(format_show_text(rows))
    }
}

fn source_label(row: &PropertyRow) -> &'static str {
    if row.from_manifest {
        "manifest"
    } else {
        "project"
    }
}

fn format_show_text(rows: &[PropertyRow]) -> String {
    if rows.is_empty() {
        return "No properties set.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Property", "Stored", "Effective", "Source"]);

    for row in rows {
        let source = if row.from_manifest {
            source_label(row).green().to_string()
        } else {
            source_label(row).to_string()
        };
        table.add_row(vec![
            row.name.clone(),
            row.stored.clone().unwrap_or_else(|| "-".to_string()),
            row.effective.clone().unwrap_or_else(|| "-".to_string()),
            source,
        ]);
    }

    table.to_string()
}
