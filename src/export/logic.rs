// src/export/logic.rs

use crate::core::Ledger;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_rows;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::absolutize;
use std::path::PathBuf;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole ledger.
    ///
    /// - `format`: xlsx | csv | json
    /// - `file`: output path; relative paths are resolved against the current directory
    /// - `force`: overwrite an existing file without asking
    ///
    /// Returns the written path, or `None` when the ledger is empty.
    pub fn export(
        ledger: &Ledger,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        if ledger.is_empty() {
            warning("No entries to export.");
            return Ok(None);
        }

        let path = absolutize(file)?;
        ensure_writable(&path, force)?;
        ensure_parent(&path)?;

        let summary = ledger.summary();
        tracing::debug!(
            format = format.as_str(),
            path = %path.display(),
            entries = ledger.len(),
            "exporting ledger"
        );

        match format {
            ExportFormat::Xlsx => export_xlsx(&build_rows(ledger.entries(), &summary), &path)?,
            ExportFormat::Csv => export_csv(&build_rows(ledger.entries(), &summary), &path)?,
            ExportFormat::Json => export_json(ledger.entries(), &summary, &path)?,
        }

        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EntryDraft};
    use crate::store::MemoryStore;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::load(Box::new(MemoryStore::new()));
        ledger
            .append(EntryDraft::new("2025-09-01", "09:00", "12:00").with_project("General"))
            .unwrap();
        ledger
            .append(
                EntryDraft::new("2025-09-01", "12:00", "12:30")
                    .with_project("General")
                    .with_category(Category::Break),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn empty_ledger_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.csv");
        let ledger = Ledger::load(Box::new(MemoryStore::new()));

        let res = ExportLogic::export(&ledger, ExportFormat::Csv, out.to_str().unwrap(), false)
            .unwrap();
        assert!(res.is_none());
        assert!(!out.exists());
    }

    #[test]
    fn csv_has_header_rows_and_trailers() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("hours.csv");

        ExportLogic::export(&sample_ledger(), ExportFormat::Csv, out.to_str().unwrap(), false)
            .unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "owner,date,project,category,start,end,hours");
        assert_eq!(lines[1], ",2025-09-01,General,Work,09:00,12:00,3.00");
        assert_eq!(lines[2], ",2025-09-01,General,Break,12:00,12:30,0.50");
        assert_eq!(lines[3], ",,,,,Total work,3.00");
        assert_eq!(lines[4], ",,,,,Total break,0.50");
        assert_eq!(lines[5], ",,,,,Overtime,0.00");
    }

    #[test]
    fn json_contains_entries_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sub").join("hours.json");

        ExportLogic::export(&sample_ledger(), ExportFormat::Json, out.to_str().unwrap(), false)
            .unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(v["entries"].as_array().unwrap().len(), 2);
        assert_eq!(v["entries"][1]["category"], "break");
        assert_eq!(v["summary"]["work_minutes"], 180);
        assert_eq!(v["summary"]["break_minutes"], 30);
    }

    #[test]
    fn existing_file_is_overwritten_with_force() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("hours.csv");
        std::fs::write(&out, "old").unwrap();

        ExportLogic::export(&sample_ledger(), ExportFormat::Csv, out.to_str().unwrap(), true)
            .unwrap();

        assert!(std::fs::read_to_string(&out).unwrap().starts_with("owner,"));
    }
}
