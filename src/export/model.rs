// src/export/model.rs

use crate::models::{Summary, TimeEntry};
use serde::Serialize;

pub(crate) const TOTAL_WORK_LABEL: &str = "Total work";
pub(crate) const TOTAL_BREAK_LABEL: &str = "Total break";
pub(crate) const OVERTIME_LABEL: &str = "Overtime";

/// Riga “piatta” del foglio: una per entry, più le righe di totale.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub owner: String,
    pub date: String,
    pub project: String,
    pub category: String,
    pub start: String,
    pub end: String,
    pub hours: String,
}

impl ExportRow {
    /// Trailer row: label in the `end` column, value in `hours`.
    fn trailer(label: &str, hours: String) -> Self {
        Self {
            owner: String::new(),
            date: String::new(),
            project: String::new(),
            category: String::new(),
            start: String::new(),
            end: label.to_string(),
            hours,
        }
    }

    pub fn is_trailer(&self) -> bool {
        self.date.is_empty() && self.start.is_empty()
    }

    pub(crate) fn cells(&self) -> [&str; 7] {
        [
            &self.owner,
            &self.date,
            &self.project,
            &self.category,
            &self.start,
            &self.end,
            &self.hours,
        ]
    }
}

impl From<&TimeEntry> for ExportRow {
    fn from(e: &TimeEntry) -> Self {
        Self {
            owner: e.owner().to_string(),
            date: e.date().to_string(),
            project: e.project().to_string(),
            category: e.category().label().to_string(),
            start: e.start().to_string(),
            end: e.end().to_string(),
            hours: e.hours_str(),
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["owner", "date", "project", "category", "start", "end", "hours"]
}

/// Index of the `hours` column.
pub(crate) const HOURS_COL: usize = 6;

pub(crate) fn trailer_rows(summary: &Summary) -> Vec<ExportRow> {
    vec![
        ExportRow::trailer(TOTAL_WORK_LABEL, summary.work_hours_str()),
        ExportRow::trailer(TOTAL_BREAK_LABEL, summary.break_hours_str()),
        ExportRow::trailer(OVERTIME_LABEL, summary.overtime_hours_str()),
    ]
}

/// Entry rows followed by the trailer rows.
pub(crate) fn build_rows(entries: &[TimeEntry], summary: &Summary) -> Vec<ExportRow> {
    entries
        .iter()
        .map(ExportRow::from)
        .chain(trailer_rows(summary))
        .collect()
}
