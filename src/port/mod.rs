//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  poll cycle, responder  ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Catalog │            │  Snapshot   │              │ Notifier  │
//! │ Adapter │            │   Store     │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! - [`outbound`]: catalog fetch, snapshot persistence, notifications
//! - [`inbound`]: availability queries and poller status for control surfaces

pub mod inbound;
pub mod outbound;
