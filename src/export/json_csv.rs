// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{TableData, notify_export_success};
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Rows as JSON objects keyed by header, in column order.
pub(crate) fn to_json_value(table: &TableData) -> Value {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let obj: Map<String, Value> = table
                .headers
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let cell = row.get(i).cloned().unwrap_or_default();
                    (h.clone(), Value::String(cell))
                })
                .collect();
            Value::Object(obj)
        })
        .collect();
    Value::Array(rows)
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(table: &TableData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&to_json_value(table))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the header line first.
pub(crate) fn export_csv(table: &TableData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
