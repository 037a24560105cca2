//! Telegram notification configuration.

use serde::Deserialize;

/// Telegram notification configuration.
///
/// Credentials are never read from the config file; see
/// `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications and commands.
    #[serde(default)]
    pub enabled: bool,
    /// Also announce failed poll cycles (can be noisy).
    #[serde(default)]
    pub notify_failures: bool,
    /// Currency symbol used when rendering prices (default: ₹).
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            notify_failures: false,
            currency_symbol: default_currency_symbol(),
        }
    }
}
