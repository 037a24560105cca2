//! In-memory snapshot store.

use parking_lot::Mutex;

use crate::domain::Snapshot;
use crate::error::Result;
use crate::port::outbound::store::SnapshotStore;

/// Snapshot store that keeps state in memory. State is lost on exit.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshot: Mutex<Snapshot>,
}

impl MemorySnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Snapshot> {
        Ok(self.snapshot.lock().clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        *self.snapshot.lock() = snapshot.clone();
        Ok(())
    }
}
