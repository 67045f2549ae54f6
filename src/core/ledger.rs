use crate::errors::AppResult;
use crate::models::entry::MidnightPolicy;
use crate::models::{Category, EntryDraft, Summary, TimeEntry};
use crate::store::{self, ENTRIES_KEY, Store};

/// Monthly work hours above which time counts as overtime.
pub const OVERTIME_THRESHOLD_HOURS: f64 = 160.0;

/// Hours worked beyond [`OVERTIME_THRESHOLD_HOURS`], never negative.
pub fn overtime_hours(work_minutes: i64) -> f64 {
    (work_minutes as f64 / 60.0 - OVERTIME_THRESHOLD_HOURS).max(0.0)
}

/// Append-only sequence of time entries.
///
/// Aggregates are recomputed from the full sequence on every call; nothing is
/// cached. Every successful append is written through to the store.
pub struct Ledger {
    store: Box<dyn Store>,
    entries: Vec<TimeEntry>,
    policy: MidnightPolicy,
}

impl Ledger {
    /// Restore the ledger from `store` (empty when nothing valid is stored).
    pub fn load(store: Box<dyn Store>) -> Self {
        let entries: Vec<TimeEntry> = store::load_or_else(store.as_ref(), ENTRIES_KEY, Vec::new);
        tracing::debug!(count = entries.len(), "ledger loaded");
        Self {
            store,
            entries,
            policy: MidnightPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MidnightPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record a new entry at the end of the ledger.
    ///
    /// An incomplete draft (empty date, start or end) is silently ignored and
    /// yields `Ok(None)`.
    pub fn append(&mut self, draft: EntryDraft) -> AppResult<Option<&TimeEntry>> {
        if !draft.is_complete() {
            tracing::debug!(?draft, "incomplete entry ignored");
            return Ok(None);
        }

        let entry = draft.build(self.policy)?;
        self.entries.push(entry);

        if let Err(e) = store::save(self.store.as_ref(), ENTRIES_KEY, &self.entries) {
            self.entries.pop();
            return Err(e);
        }

        let added = self.entries.last();
        if let Some(e) = added {
            tracing::debug!(
                date = e.date(),
                start = e.start(),
                end = e.end(),
                minutes = e.minutes(),
                "entry appended"
            );
        }
        Ok(added)
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_minutes(&self, category: Category) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .map(TimeEntry::minutes)
            .sum()
    }

    pub fn overtime_hours(&self) -> f64 {
        overtime_hours(self.total_minutes(Category::Work))
    }

    pub fn summary(&self) -> Summary {
        let work_minutes = self.total_minutes(Category::Work);
        Summary {
            work_minutes,
            break_minutes: self.total_minutes(Category::Break),
            overtime_hours: overtime_hours(work_minutes),
        }
    }
}
