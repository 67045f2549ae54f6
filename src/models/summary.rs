use crate::utils::time::hours_decimal;
use serde::Serialize;

/// Aggregates derived from the full ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub work_minutes: i64,
    pub break_minutes: i64,
    pub overtime_hours: f64,
}

impl Summary {
    pub fn work_hours_str(&self) -> String {
        hours_decimal(self.work_minutes)
    }

    pub fn break_hours_str(&self) -> String {
        hours_decimal(self.break_minutes)
    }

    pub fn overtime_hours_str(&self) -> String {
        format!("{:.2}", self.overtime_hours)
    }
}
