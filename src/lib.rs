//! Restock - catalog availability watcher.
//!
//! Polls a remote product catalog on a fixed interval, detects products that
//! flip from unavailable to available, persists the latest availability
//! snapshot, and announces restocks through a Telegram bot. The bot (and the
//! CLI) also answer on-demand "what is available now" queries.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Products, snapshots, transition detection and listings
//! - [`port`] - Trait seams: catalog, snapshot store, notifier, query
//! - [`adapter`] - HTTP catalog client, JSON store, Telegram bot, CLI
//! - [`application`] - Poll cycle, scheduler, status and query services
//! - [`infrastructure`] - Configuration and runtime wiring
//! - [`error`] - Crate-wide error types
//!
//! # Features
//!
//! - `telegram` (default) - Telegram notifications and bot commands
//!
//! # Example
//!
//! ```
//! use restock::domain::{detect, Product, Snapshot, SnapshotEntry};
//!
//! let previous = Snapshot::from_entries(vec![SnapshotEntry::new("Milk", false)]);
//! let current = vec![Product::try_new("Milk", None, true).unwrap()];
//!
//! let detection = detect(&previous, &current);
//! assert_eq!(detection.transitions.len(), 1);
//! assert_eq!(detection.transitions[0].name, "Milk");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
