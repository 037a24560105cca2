//! Composition root for runtime wiring.
//!
//! Builds the concrete adapters from [`Config`] and hands them to the
//! application services as trait objects.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;
#[cfg(feature = "telegram")]
use tracing::warn;

use crate::adapter::outbound::catalog::CatalogClient;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::control::TelegramControl;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::notifier::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::store::JsonSnapshotStore;
use crate::application::{AvailabilityResponder, CycleReport, PollCycle, PollStatus, Poller};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::query::AvailabilityQuery;
use crate::port::outbound::catalog::CatalogFetcher;
use crate::port::outbound::notifier::{LogNotifier, NotifierRegistry};
use crate::port::outbound::store::SnapshotStore;

/// Build the HTTP catalog client.
#[allow(clippy::result_large_err)]
pub fn build_catalog(config: &Config) -> Result<Arc<dyn CatalogFetcher>> {
    Ok(Arc::new(CatalogClient::from_config(&config.catalog)?))
}

/// Build the snapshot store at the configured path.
#[must_use]
pub fn build_store(config: &Config) -> Arc<dyn SnapshotStore> {
    Arc::new(JsonSnapshotStore::new(&config.poll.snapshot_path))
}

/// Build the on-demand query service.
#[must_use]
pub fn build_responder(
    config: &Config,
    catalog: Arc<dyn CatalogFetcher>,
) -> Arc<AvailabilityResponder> {
    Arc::new(AvailabilityResponder::new(catalog, config.query_timeout()))
}

/// Build notifier registry from configuration.
///
/// The Telegram notifier is registered with command handling when it is
/// enabled and its credentials are present in the environment.
#[cfg(feature = "telegram")]
pub(crate) fn build_notifier_registry(
    config: &Config,
    query: Arc<dyn AvailabilityQuery>,
    status: Arc<PollStatus>,
) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));

    if !config.telegram.enabled {
        return registry;
    }

    match TelegramConfig::from_env() {
        Some(tg_config) => {
            let tg_config = TelegramConfig {
                notify_failures: config.telegram.notify_failures,
                currency_symbol: config.telegram.currency_symbol.clone(),
                ..tg_config
            };
            let control = TelegramControl::new(query, config.telegram.currency_symbol.clone())
                .with_monitor(status);
            registry.register(Box::new(TelegramNotifier::new_with_control(
                tg_config, control,
            )));
            info!("Telegram notifier enabled with command handling");
        }
        None => {
            warn!("Telegram enabled but TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set");
        }
    }

    registry
}

/// Build notifier registry from configuration (non-telegram variant).
#[cfg(not(feature = "telegram"))]
pub(crate) fn build_notifier_registry(
    _config: &Config,
    _query: Arc<dyn AvailabilityQuery>,
    _status: Arc<PollStatus>,
) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));
    registry
}

/// Fully wired poller. The Telegram command surface shares its catalog
/// client through the responder registered with the notifier.
pub struct App {
    poller: Poller,
}

impl App {
    /// Wire every component for the long-running service.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog client cannot be built.
    #[allow(clippy::result_large_err)]
    pub fn build(config: &Config) -> Result<Self> {
        let catalog = build_catalog(config)?;
        let store = build_store(config);
        let responder = build_responder(config, Arc::clone(&catalog));
        let status = Arc::new(PollStatus::new(config.poll.interval_secs));

        let query: Arc<dyn AvailabilityQuery> = responder;
        let notifiers = build_notifier_registry(config, query, Arc::clone(&status));
        info!(notifiers = notifiers.len(), "Notifiers registered");

        let cycle = PollCycle::new(
            catalog,
            store,
            Arc::new(notifiers),
            config.detect_policy(),
        );
        let poller = Poller::new(cycle, config.poll_interval(), status);

        Ok(Self { poller })
    }

    /// Run the poll loop until `shutdown` fires.
    pub async fn run(self, shutdown: watch::Receiver<bool>) {
        self.poller.run(shutdown).await;
    }
}

/// Run a single cycle with log-only notification.
///
/// # Errors
///
/// Returns the cycle error, or the wiring error if the catalog client cannot
/// be built.
pub async fn run_once(config: &Config) -> Result<CycleReport> {
    let mut notifiers = NotifierRegistry::new();
    notifiers.register(Box::new(LogNotifier));

    let cycle = PollCycle::new(
        build_catalog(config)?,
        build_store(config),
        Arc::new(notifiers),
        config.detect_policy(),
    );
    cycle.run().await
}
