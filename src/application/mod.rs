//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod cycle;
pub mod responder;
pub mod scheduler;
pub mod status;

pub use cycle::{CycleReport, PollCycle};
pub use responder::{render_report, AvailabilityResponder};
pub use scheduler::Poller;
pub use status::PollStatus;
