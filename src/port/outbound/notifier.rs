//! Notifier port for event notifications.
//!
//! Defines the trait for announcing poll results such as newly available
//! products and failed cycles.

use chrono::{DateTime, Utc};

use crate::domain::Transition;

/// Events that can trigger notifications.
#[derive(Debug, Clone)]
pub enum Event {
    /// One or more products became available.
    ProductsAvailable(AvailabilityEvent),
    /// A poll cycle failed and was skipped.
    CycleFailed {
        /// Error category (`network`, `persistence`, ...).
        kind: &'static str,
        /// Human-readable reason.
        reason: String,
    },
}

/// Products that flipped to available in one cycle.
#[derive(Debug, Clone)]
pub struct AvailabilityEvent {
    /// The products, in catalog order.
    pub products: Vec<Transition>,
    /// When the cycle detected them.
    pub detected_at: DateTime<Utc>,
}

impl AvailabilityEvent {
    #[must_use]
    pub fn new(products: Vec<Transition>) -> Self {
        Self {
            products,
            detected_at: Utc::now(),
        }
    }
}

/// Trait for notification handlers.
///
/// Notifications are fire-and-forget. A failing notifier must log and carry
/// on; it can never undo work the caller already committed.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `notify` should return quickly; slow I/O belongs on a spawned task
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::{info, warn};
        match event {
            Event::ProductsAvailable(e) => {
                let names: Vec<&str> = e.products.iter().map(|p| p.name.as_str()).collect();
                info!(
                    count = e.products.len(),
                    products = ?names,
                    detected_at = %e.detected_at,
                    "Newly available products"
                );
            }
            Event::CycleFailed { kind, reason } => {
                warn!(kind, reason = %reason, "Poll cycle failed");
            }
        }
    }
}
