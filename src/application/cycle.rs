//! One fetch → detect → persist → notify pass.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{detect_with, DetectPolicy, Transition};
use crate::error::Result;
use crate::port::outbound::catalog::CatalogFetcher;
use crate::port::outbound::notifier::{AvailabilityEvent, Event, NotifierRegistry};
use crate::port::outbound::store::SnapshotStore;

/// Outcome of a completed cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    /// Products returned by the catalog.
    pub fetched: usize,
    /// Entries in the snapshot that was persisted.
    pub persisted: usize,
    /// Products that became available.
    pub transitions: Vec<Transition>,
}

/// The poll cycle with its collaborators.
///
/// Each run receives its data from the collaborators and hands results back;
/// nothing is cached between runs.
pub struct PollCycle {
    catalog: Arc<dyn CatalogFetcher>,
    store: Arc<dyn SnapshotStore>,
    notifiers: Arc<NotifierRegistry>,
    policy: DetectPolicy,
}

impl PollCycle {
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogFetcher>,
        store: Arc<dyn SnapshotStore>,
        notifiers: Arc<NotifierRegistry>,
        policy: DetectPolicy,
    ) -> Self {
        Self {
            catalog,
            store,
            notifiers,
            policy,
        }
    }

    /// Run one cycle.
    ///
    /// Any failure before the snapshot is saved leaves the store untouched
    /// and announces nothing. Notification runs only after a successful save,
    /// so a transition is never announced without being recorded.
    ///
    /// # Errors
    ///
    /// Returns the first fetch, validation or persistence error.
    pub async fn run(&self) -> Result<CycleReport> {
        let current = self.catalog.fetch_products().await?;
        let previous = self.store.load()?;

        let detection = detect_with(&previous, &current, self.policy);
        self.store.save(&detection.next)?;

        debug!(
            catalog = self.catalog.catalog_name(),
            previous = previous.len(),
            next = detection.next.len(),
            "Snapshot updated"
        );

        if detection.has_transitions() {
            info!(
                count = detection.transitions.len(),
                "Products became available"
            );
            self.notifiers
                .notify_all(Event::ProductsAvailable(AvailabilityEvent::new(
                    detection.transitions.clone(),
                )));
        } else {
            info!("No new products became available");
        }

        Ok(CycleReport {
            fetched: current.len(),
            persisted: detection.next.len(),
            transitions: detection.transitions,
        })
    }

    /// Publish a cycle failure to the notifiers.
    pub(crate) fn report_failure(&self, kind: &'static str, reason: String) {
        self.notifiers
            .notify_all(Event::CycleFailed { kind, reason });
    }
}
