//! Telegram notification and command handling.
//!
//! Provides the [`TelegramNotifier`] for announcing restocks and handling
//! bot commands. Spawns background workers for both outbound messages and
//! inbound command processing.
//!
//! Requires the `telegram` feature to be enabled.

use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::port::outbound::notifier::{Event, Notifier};

use super::auth::command_response_for_message;
use super::command::bot_commands;
use super::control::TelegramControl;
use super::format::format_event_message;

/// Configuration for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for notifications and the only chat allowed to issue
    /// commands.
    pub chat_id: i64,
    /// Also announce failed poll cycles.
    pub notify_failures: bool,
    /// Currency symbol used when rendering prices.
    pub currency_symbol: String,
}

impl TelegramConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None` if
    /// either is missing or invalid.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .and_then(|s| s.parse().ok())?;

        Some(Self {
            bot_token,
            chat_id,
            notify_failures: false,
            currency_symbol: "₹".to_string(),
        })
    }
}

/// Telegram notifier that sends messages to a chat.
///
/// Implements the [`Notifier`] trait and spawns background workers for
/// message delivery and command handling.
pub struct TelegramNotifier {
    /// Channel sender for queuing outbound notifications.
    sender: mpsc::UnboundedSender<Event>,
}

impl TelegramNotifier {
    /// Create a notifier that also answers bot commands, and spawn both
    /// background workers.
    #[must_use]
    pub fn new_with_control(config: TelegramConfig, control: TelegramControl) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        tokio::spawn(telegram_worker(config.clone(), receiver));
        tokio::spawn(telegram_command_worker(config, control));

        Self { sender }
    }
}

impl Notifier for TelegramNotifier {
    fn notify(&self, event: Event) {
        if self.sender.send(event).is_err() {
            warn!("Telegram notifier channel closed");
        }
    }
}

/// Background worker that sends Telegram messages.
async fn telegram_worker(config: TelegramConfig, mut receiver: mpsc::UnboundedReceiver<Event>) {
    let bot = Bot::new(&config.bot_token);
    let chat_id = ChatId(config.chat_id);

    info!(chat_id = config.chat_id, "Telegram notifier started");

    while let Some(event) = receiver.recv().await {
        let Some(text) = format_event_message(&event, &config) else {
            continue;
        };

        if let Err(e) = bot
            .send_message(chat_id, &text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
        {
            error!(error = %e, "Failed to send Telegram message");
        }
    }

    warn!("Telegram notifier worker shutting down");
}

/// Background worker that handles inbound Telegram commands.
async fn telegram_command_worker(config: TelegramConfig, control: TelegramControl) {
    let bot = Bot::new(&config.bot_token);
    let allowed_chat = ChatId(config.chat_id);

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!(
        chat_id = config.chat_id,
        "Telegram command listener started"
    );

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if let Some(response) =
                command_response_for_message(text, msg.chat.id, allowed_chat, &control).await
            {
                if let Err(e) = bot.send_message(msg.chat.id, response).await {
                    error!(error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!(
        commands = ?bot_commands().iter().map(|(cmd, _)| *cmd).collect::<Vec<_>>(),
        "Registered bot commands with Telegram"
    );
    Ok(())
}

/// Send a single plain-text message. Used by the CLI connectivity check.
///
/// # Errors
///
/// Returns [`crate::error::Error::Telegram`] if the Bot API call fails.
pub async fn send_test_message(config: &TelegramConfig, text: &str) -> crate::error::Result<()> {
    let bot = Bot::new(&config.bot_token);
    bot.send_message(ChatId(config.chat_id), text)
        .await
        .map_err(|e| crate::error::Error::Telegram(e.to_string()))?;
    Ok(())
}
