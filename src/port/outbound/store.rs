//! Snapshot persistence port.

use crate::domain::Snapshot;
use crate::error::Result;

/// Durable storage for the last-known availability snapshot.
///
/// Only the poll cycle writes; readers never need a lock.
pub trait SnapshotStore: Send + Sync {
    /// Load the stored snapshot. A store with no prior state yields an empty
    /// snapshot rather than an error.
    fn load(&self) -> Result<Snapshot>;

    /// Replace the stored snapshot. A failed save must leave the previous
    /// snapshot readable.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}
