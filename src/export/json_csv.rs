// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::ExportRow;
use crate::export::notify_export_success;
use crate::models::{Summary, TimeEntry};
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct JsonExport<'a> {
    entries: &'a [TimeEntry],
    summary: &'a Summary,
}

/// Export JSON pretty-printed: entries as stored plus the summary.
pub(crate) fn export_json(entries: &[TimeEntry], summary: &Summary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&JsonExport { entries, summary })?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header incluso grazie a serde), righe di totale in coda.
pub(crate) fn export_csv(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
