//! Shared poller status.
//!
//! Tracks the Idle/Running state machine and per-cycle counters. The
//! scheduler writes it; the Telegram `/status` command and logs read it.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::port::inbound::query::{PollMonitor, PollState, PollSummary};

#[derive(Debug)]
struct Inner {
    state: PollState,
    cycles_completed: u64,
    cycles_failed: u64,
    last_started_at: Option<DateTime<Utc>>,
    last_finished_at: Option<DateTime<Utc>>,
    last_transition_count: usize,
    last_error: Option<String>,
}

/// Poller status shared between the scheduler and control surfaces.
#[derive(Debug)]
pub struct PollStatus {
    interval_secs: u64,
    inner: RwLock<Inner>,
}

impl PollStatus {
    #[must_use]
    pub fn new(interval_secs: u64) -> Self {
        Self {
            interval_secs,
            inner: RwLock::new(Inner {
                state: PollState::Idle,
                cycles_completed: 0,
                cycles_failed: 0,
                last_started_at: None,
                last_finished_at: None,
                last_transition_count: 0,
                last_error: None,
            }),
        }
    }

    /// Move Idle → Running. Returns `None` while another cycle is running.
    ///
    /// The returned guard moves the state back to Idle when dropped, which
    /// covers cancelled cycles too.
    #[must_use]
    pub fn try_begin(&self) -> Option<CycleGuard<'_>> {
        let mut inner = self.inner.write();
        if inner.state == PollState::Running {
            return None;
        }
        inner.state = PollState::Running;
        inner.last_started_at = Some(Utc::now());
        Some(CycleGuard { status: self })
    }

    #[must_use]
    pub fn state(&self) -> PollState {
        self.inner.read().state
    }

    fn record_success(&self, transitions: usize) {
        let mut inner = self.inner.write();
        inner.cycles_completed += 1;
        inner.last_transition_count = transitions;
        inner.last_error = None;
        inner.last_finished_at = Some(Utc::now());
    }

    fn record_failure(&self, reason: String) {
        let mut inner = self.inner.write();
        inner.cycles_failed += 1;
        inner.last_transition_count = 0;
        inner.last_error = Some(reason);
        inner.last_finished_at = Some(Utc::now());
    }
}

impl PollMonitor for PollStatus {
    fn summary(&self) -> PollSummary {
        let inner = self.inner.read();
        PollSummary {
            state: inner.state,
            interval_secs: self.interval_secs,
            cycles_completed: inner.cycles_completed,
            cycles_failed: inner.cycles_failed,
            last_started_at: inner.last_started_at,
            last_finished_at: inner.last_finished_at,
            last_transition_count: inner.last_transition_count,
            last_error: inner.last_error.clone(),
        }
    }
}

/// Marks one running cycle. Dropping it returns the poller to Idle.
#[must_use = "dropping the guard immediately ends the cycle"]
pub struct CycleGuard<'a> {
    status: &'a PollStatus,
}

impl CycleGuard<'_> {
    /// Record a successful cycle.
    pub fn succeeded(self, transitions: usize) {
        self.status.record_success(transitions);
    }

    /// Record a failed cycle.
    pub fn failed(self, reason: impl Into<String>) {
        self.status.record_failure(reason.into());
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        self.status.inner.write().state = PollState::Idle;
    }
}
