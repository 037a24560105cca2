use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;

/// Test Telegram notification by sending a test message.
#[cfg(feature = "telegram")]
pub async fn execute_telegram(config: &Config) -> Result<()> {
    use serde_json::json;

    use crate::adapter::inbound::cli::output;
    use crate::adapter::outbound::notifier::telegram::notifier::{
        send_test_message, TelegramConfig,
    };

    let tg_config = TelegramConfig::from_env().ok_or_else(|| {
        Error::Telegram("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set".to_string())
    })?;
    let masked = mask_token(&tg_config.bot_token);

    if !output::is_json() {
        output::section("Telegram Check");
        output::field("Bot token", &masked);
        output::field("Chat ID", tg_config.chat_id);
    }

    let text = format!(
        "✅ restock {} test message\n\nNotifications will arrive in this chat.",
        env!("CARGO_PKG_VERSION")
    );
    send_test_message(&tg_config, &text).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "check.telegram",
            "masked_token": masked,
            "chat_id": tg_config.chat_id,
            "enabled_in_config": config.telegram.enabled,
            "status": "sent",
        }));
        return Ok(());
    }

    output::success("Sent Telegram test message");
    if !config.telegram.enabled {
        output::hint("set `telegram.enabled = true` to receive restock notifications");
    }
    output::hint("check Telegram for the message");

    Ok(())
}

/// Without the `telegram` feature there is nothing to check.
#[cfg(not(feature = "telegram"))]
pub async fn execute_telegram(_config: &Config) -> Result<()> {
    Err(Error::Telegram(
        "built without the `telegram` feature".to_string(),
    ))
}

/// Keep the bot id prefix and the last four characters of the secret.
#[cfg_attr(not(feature = "telegram"), allow(dead_code))]
fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((id, secret)) if secret.chars().count() > 4 => {
            let tail: String = secret
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("{id}:…{tail}")
        }
        _ => "…".to_string(),
    }
}
