use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::infrastructure::config::settings::Config;

/// Environment variables the Telegram notifier reads.
const TELEGRAM_VARS: [&str; 2] = ["TELEGRAM_BOT_TOKEN", "TELEGRAM_CHAT_ID"];

/// Validate configuration without starting the poller.
pub fn execute_config(path: &Path, config: &Config) {
    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Catalog", &config.catalog.url);
    output::field("Interval", format!("{}s", config.poll.interval_secs));
    output::field("Snapshot", &config.poll.snapshot_path);
    output::field("Query params", config.catalog.query.len());
    output::field("Headers", config.catalog.headers.len());

    if config.telegram.enabled {
        let missing = missing_env_vars(&TELEGRAM_VARS);
        if missing.is_empty() {
            output::success("Telegram integration configured");
        } else {
            output::warning("Telegram enabled but environment variables are missing");
            for name in missing {
                output::field("Missing", name);
            }
        }
    } else {
        output::field("Telegram", "disabled");
    }

    output::success("Configuration check complete");
}

fn missing_env_vars<'a>(names: &[&'a str]) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| std::env::var(name).map_or(true, |v| v.trim().is_empty()))
        .collect()
}
