//! Start/stop timer that turns a live interval into a ledger entry.
//!
//! While running, a background ticker notifies observers with the elapsed
//! seconds at a fixed interval. That value is for display only: the stored
//! duration is always recomputed from the `HH:MM` start and end strings, so
//! the two can disagree by up to a minute.

use super::clock::{Clock, SystemClock};
use super::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryDraft, TimeEntry};
use crate::utils::time::clock_string;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Receives live elapsed-time updates while the timer runs.
pub trait TickObserver: Send + Sync {
    fn on_tick(&self, elapsed_secs: i64);
}

/// Background task; cancelled when dropped.
struct Ticker {
    cancel: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    fn spawn(
        clock: Arc<dyn Clock>,
        observers: Vec<Arc<dyn TickObserver>>,
        started_at: DateTime<Local>,
        interval: Duration,
    ) -> Self {
        let (cancel, cancelled) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                match cancelled.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        let elapsed = (clock.now() - started_at).num_seconds();
                        for o in &observers {
                            o.on_tick(elapsed);
                        }
                    }
                    // cancelled, or the timer went away
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        let _ = self.cancel.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

enum State {
    Idle,
    Running {
        started_at: DateTime<Local>,
        _ticker: Option<Ticker>,
    },
}

pub struct Timer {
    clock: Arc<dyn Clock>,
    observers: Vec<Arc<dyn TickObserver>>,
    interval: Duration,
    state: State,
}

impl Timer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            observers: Vec::new(),
            interval: DEFAULT_TICK,
            state: State::Idle,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Observers registered while running take effect on the next start.
    pub fn subscribe(&mut self, observer: Arc<dyn TickObserver>) {
        self.observers.push(observer);
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        match &self.state {
            State::Running { started_at, .. } => Some(*started_at),
            State::Idle => None,
        }
    }

    /// Live elapsed seconds; approximate, never stored.
    pub fn elapsed_seconds(&self) -> Option<i64> {
        self.started_at()
            .map(|s| (self.clock.now() - s).num_seconds())
    }

    pub fn start(&mut self) -> AppResult<()> {
        if let Some(since) = self.started_at() {
            return Err(AppError::TimerAlreadyRunning(clock_string(&since)));
        }

        let started_at = self.clock.now();

        // nothing to notify without observers
        let ticker = (!self.observers.is_empty()).then(|| {
            Ticker::spawn(
                Arc::clone(&self.clock),
                self.observers.clone(),
                started_at,
                self.interval,
            )
        });

        self.state = State::Running {
            started_at,
            _ticker: ticker,
        };
        tracing::debug!(started_at = %started_at, "timer started");
        Ok(())
    }

    /// Stop the timer and record the interval in `ledger`.
    ///
    /// `template` supplies owner, date, project and category; its start and
    /// end are replaced by the timer's `HH:MM` values. Stopping an idle timer
    /// does nothing.
    pub fn stop<'l>(
        &mut self,
        ledger: &'l mut Ledger,
        template: EntryDraft,
    ) -> AppResult<Option<&'l TimeEntry>> {
        let started_at = match std::mem::replace(&mut self.state, State::Idle) {
            State::Running { started_at, .. } => started_at,
            State::Idle => return Ok(None),
        };

        let stopped_at = self.clock.now();
        tracing::debug!(started_at = %started_at, stopped_at = %stopped_at, "timer stopped");

        let draft = EntryDraft {
            start: clock_string(&started_at),
            end: clock_string(&stopped_at),
            ..template
        };
        ledger.append(draft)
    }

    /// Drop a running interval without recording it.
    pub fn cancel(&mut self) {
        if self.is_running() {
            tracing::debug!("timer cancelled");
        }
        self.state = State::Idle;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
