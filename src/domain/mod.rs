//! Catalog-agnostic domain logic.

pub mod error;
pub mod listing;
pub mod product;
pub mod snapshot;
pub mod transition;

pub use listing::{format_price, AvailabilityReport, AvailableProduct};
pub use product::Product;
pub use snapshot::{Snapshot, SnapshotEntry};
pub use transition::{detect, detect_with, DetectPolicy, Detection, Transition};
