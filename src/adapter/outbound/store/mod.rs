//! Snapshot store adapters.

pub mod json;
pub mod memory;

pub use json::JsonSnapshotStore;
pub use memory::MemorySnapshotStore;
