//! Poll scheduler configuration.

use serde::Deserialize;

/// Poll loop and snapshot settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Seconds between availability checks (default: 30).
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Where the availability snapshot is stored.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Announce products seen for the first time while available.
    #[serde(default)]
    pub announce_new_products: bool,
    /// Upper bound for one on-demand availability query (default: 15).
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

const fn default_interval_secs() -> u64 {
    30
}

fn default_snapshot_path() -> String {
    "currentStatus.json".to_string()
}

const fn default_query_timeout_secs() -> u64 {
    15
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            snapshot_path: default_snapshot_path(),
            announce_new_products: false,
            query_timeout_secs: default_query_timeout_secs(),
        }
    }
}
