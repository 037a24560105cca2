//! Outbound adapters (driven side).
//!
//! - [`catalog`]: HTTP catalog client
//! - [`store`]: snapshot persistence
//! - [`notifier`]: chat notifications

pub mod catalog;
pub mod notifier;
pub mod store;
