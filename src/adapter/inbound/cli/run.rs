//! Handler for the `run` command.

use tokio::sync::watch;
use tracing::{info, warn};

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::bootstrap::App;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
///
/// Polls until Ctrl-C. The first cycle starts immediately.
pub async fn execute(config: &Config) -> Result<()> {
    print_startup_config(config);

    let app = App::build(config)?;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Ctrl-C received"),
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
        let _ = shutdown_tx.send(true);
    });

    app.run(shutdown_rx).await;
    Ok(())
}

fn print_startup_config(config: &Config) {
    if output::is_quiet() && !output::is_json() {
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Catalog", &config.catalog.url);
    output::field("Interval", format!("{}s", config.poll.interval_secs));
    output::field("Snapshot", &config.poll.snapshot_path);
    output::field(
        "Telegram",
        if config.telegram.enabled {
            "enabled"
        } else {
            "disabled"
        },
    );
    if config.poll.announce_new_products {
        output::warning("First-seen products will be announced");
    }
}
