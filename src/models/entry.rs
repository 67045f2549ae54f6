use super::category::Category;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use crate::utils::time::{hours_decimal, minutes_between_str, parse_time};
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// What to do with an entry whose end time precedes its start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MidnightPolicy {
    /// Store the negative duration as is.
    #[default]
    Keep,
    /// Treat the end as falling on the next day (+1440 minutes).
    Wrap,
    /// Refuse the entry.
    Reject,
}

impl MidnightPolicy {
    fn apply(self, start: &str, end: &str, minutes: i64) -> AppResult<i64> {
        if minutes >= 0 {
            return Ok(minutes);
        }
        match self {
            MidnightPolicy::Keep => Ok(minutes),
            MidnightPolicy::Wrap => Ok(minutes + MINUTES_PER_DAY),
            MidnightPolicy::Reject => Err(AppError::MidnightCrossing {
                start: start.to_string(),
                end: end.to_string(),
            }),
        }
    }
}

/// One recorded interval. Fields are fixed at creation; `minutes` is computed
/// once from `start`/`end` and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(default)]
    owner: String,
    date: String,
    project: String,
    #[serde(default)]
    category: Category,
    start: String,
    end: String,
    minutes: i64,
}

impl TimeEntry {
    pub fn owner(&self) -> &str {
        &self.owner
    }
    pub fn date(&self) -> &str {
        &self.date
    }
    pub fn project(&self) -> &str {
        &self.project
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn start(&self) -> &str {
        &self.start
    }
    pub fn end(&self) -> &str {
        &self.end
    }
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn hours_str(&self) -> String {
        hours_decimal(self.minutes)
    }
}

/// Raw form fields an entry is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub owner: String,
    pub date: String,
    pub project: String,
    pub category: Category,
    pub start: String,
    pub end: String,
}

impl EntryDraft {
    pub fn new(date: &str, start: &str, end: &str) -> Self {
        Self {
            date: date.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            ..Default::default()
        }
    }

    pub fn with_owner(mut self, owner: &str) -> Self {
        self.owner = owner.to_string();
        self
    }

    pub fn with_project(mut self, project: &str) -> Self {
        self.project = project.to_string();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Date, start and end are all filled in.
    pub fn is_complete(&self) -> bool {
        !self.date.trim().is_empty() && !self.start.trim().is_empty() && !self.end.trim().is_empty()
    }

    /// Turn the draft into an entry, computing its duration.
    pub fn build(self, policy: MidnightPolicy) -> AppResult<TimeEntry> {
        let date = self.date.trim().to_string();
        let start = self.start.trim().to_string();
        let end = self.end.trim().to_string();

        parse_date(&date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let raw = minutes_between_str(&start, &end).ok_or_else(|| {
            let bad = if parse_time(&start).is_none() { &start } else { &end };
            AppError::InvalidTime(bad.clone())
        })?;

        let minutes = policy.apply(&start, &end, raw)?;

        Ok(TimeEntry {
            owner: self.owner.trim().to_string(),
            date,
            project: self.project.trim().to_string(),
            category: self.category,
            start,
            end,
            minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_computes_duration_once() {
        let e = EntryDraft::new("2025-09-01", "09:00", "12:00")
            .with_project("General")
            .with_owner(" Ann ")
            .build(MidnightPolicy::Keep)
            .unwrap();

        assert_eq!(e.minutes(), 180);
        assert_eq!(e.owner(), "Ann");
        assert_eq!(e.category(), Category::Work);
        assert_eq!(e.hours_str(), "3.00");
    }

    #[test]
    fn completeness_requires_date_start_end() {
        assert!(EntryDraft::new("2025-09-01", "09:00", "10:00").is_complete());
        assert!(!EntryDraft::new("", "09:00", "10:00").is_complete());
        assert!(!EntryDraft::new("2025-09-01", " ", "10:00").is_complete());
        assert!(!EntryDraft::new("2025-09-01", "09:00", "").is_complete());
    }

    #[test]
    fn midnight_policies() {
        let draft = EntryDraft::new("2025-09-01", "22:00", "02:00");

        let kept = draft.clone().build(MidnightPolicy::Keep).unwrap();
        assert_eq!(kept.minutes(), -1200);

        let wrapped = draft.clone().build(MidnightPolicy::Wrap).unwrap();
        assert_eq!(wrapped.minutes(), 240);

        let rejected = draft.build(MidnightPolicy::Reject);
        assert!(matches!(rejected, Err(AppError::MidnightCrossing { .. })));
    }

    #[test]
    fn malformed_fields_are_rejected() {
        let bad_time = EntryDraft::new("2025-09-01", "9 am", "10:00").build(MidnightPolicy::Keep);
        assert!(matches!(bad_time, Err(AppError::InvalidTime(t)) if t == "9 am"));

        let bad_end = EntryDraft::new("2025-09-01", "09:00", "25:00").build(MidnightPolicy::Keep);
        assert!(matches!(bad_end, Err(AppError::InvalidTime(t)) if t == "25:00"));

        let bad_date = EntryDraft::new("01-09-2025", "09:00", "10:00").build(MidnightPolicy::Keep);
        assert!(matches!(bad_date, Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn legacy_json_without_owner_and_category_loads() {
        let json = r#"{"date":"2025-01-02","project":"Algemeen","start":"08:00","end":"09:30","minutes":90}"#;
        let e: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.owner(), "");
        assert_eq!(e.category(), Category::Work);
        assert_eq!(e.minutes(), 90);
    }
}
