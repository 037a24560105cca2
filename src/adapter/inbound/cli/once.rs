//! Handler for the `once` command.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::format_price;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Run one availability check, persist the snapshot, and print transitions.
pub async fn execute(config: &Config) -> Result<()> {
    let report = bootstrap::run_once(config).await?;
    let currency = &config.telegram.currency_symbol;

    if output::is_json() {
        output::json_output(json!({
            "command": "once",
            "fetched": report.fetched,
            "persisted": report.persisted,
            "transitions": report.transitions,
        }));
        return Ok(());
    }

    output::section("Availability Check");
    output::field("Fetched", report.fetched);
    output::field("Snapshot", &config.poll.snapshot_path);

    if report.transitions.is_empty() {
        output::success("No new products became available");
        return Ok(());
    }

    output::section("New Products Available");
    for transition in &report.transitions {
        output::item(&transition.name, &format_price(transition.price, currency));
    }
    output::success(&format!(
        "{} product(s) became available",
        report.transitions.len()
    ));

    Ok(())
}
