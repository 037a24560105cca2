//! Query ports for operator-facing adapters.
//!
//! Keeps control surfaces (Telegram commands, CLI) decoupled from the
//! concrete responder and scheduler types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::AvailabilityReport;
use crate::error::Result;

/// Answers "what is available right now" with a fresh catalog fetch.
#[async_trait]
pub trait AvailabilityQuery: Send + Sync {
    /// Fetch the catalog and report available products.
    ///
    /// Never reads or writes the snapshot store.
    async fn available_now(&self) -> Result<AvailabilityReport>;
}

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Waiting for the next tick.
    Idle,
    /// A fetch → detect → persist → notify cycle is in flight.
    Running,
}

impl PollState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
        }
    }
}

/// Point-in-time view of poller activity.
#[derive(Debug, Clone)]
pub struct PollSummary {
    pub state: PollState,
    pub interval_secs: u64,
    pub cycles_completed: u64,
    pub cycles_failed: u64,
    pub last_started_at: Option<DateTime<Utc>>,
    pub last_finished_at: Option<DateTime<Utc>>,
    pub last_transition_count: usize,
    pub last_error: Option<String>,
}

/// Read-only access to poller status.
pub trait PollMonitor: Send + Sync {
    fn summary(&self) -> PollSummary;
}
