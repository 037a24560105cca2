//! Telegram command execution against the responder and poller status.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::responder::render_report;
use crate::port::inbound::query::{AvailabilityQuery, PollMonitor};

use super::command::{command_help, TelegramCommand};

/// Command executor for Telegram bot commands.
#[derive(Clone)]
pub struct TelegramControl {
    query: Arc<dyn AvailabilityQuery>,
    monitor: Option<Arc<dyn PollMonitor>>,
    currency_symbol: String,
    started_at: DateTime<Utc>,
}

impl TelegramControl {
    /// Create a control that can answer `/available` only.
    #[must_use]
    pub fn new(query: Arc<dyn AvailabilityQuery>, currency_symbol: impl Into<String>) -> Self {
        Self {
            query,
            monitor: None,
            currency_symbol: currency_symbol.into(),
            started_at: Utc::now(),
        }
    }

    /// Attach poller status for `/status`.
    #[must_use]
    pub fn with_monitor(mut self, monitor: Arc<dyn PollMonitor>) -> Self {
        self.monitor = Some(monitor);
        self
    }

    /// Execute one parsed command and return response text.
    pub async fn execute(&self, command: TelegramCommand) -> String {
        match command {
            TelegramCommand::Start | TelegramCommand::Help => command_help().to_string(),
            TelegramCommand::Available => {
                let result = self.query.available_now().await;
                render_report(&result, &self.currency_symbol)
            }
            TelegramCommand::Status => self.status_text(),
            TelegramCommand::Version => version_text(),
        }
    }

    fn status_text(&self) -> String {
        let Some(monitor) = &self.monitor else {
            return "📊 Status\n\nPoller status not available".to_string();
        };
        let summary = monitor.summary();

        let last_check = summary
            .last_finished_at
            .map_or_else(|| "never".to_string(), format_timestamp);
        let last_error = summary.last_error.as_deref().unwrap_or("none");

        format!(
            "📊 Status\n\n\
            ▶️ State: {}\n\
            ⏱️ Uptime: {}\n\
            🔁 Interval: {}s\n\n\
            📈 Cycles\n\
            • Completed: {}\n\
            • Failed: {}\n\
            • Last check: {}\n\
            • Last transitions: {}\n\
            • Last error: {}",
            summary.state.as_str(),
            format_uptime(self.started_at),
            summary.interval_secs,
            summary.cycles_completed,
            summary.cycles_failed,
            last_check,
            summary.last_transition_count,
            last_error,
        )
    }
}

fn version_text() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let commit = option_env!("GIT_COMMIT_SHORT").unwrap_or("unknown");

    format!("🔖 Version v{version}\n\n🔗 Commit: {commit}")
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn format_uptime(started_at: DateTime<Utc>) -> String {
    let total_seconds = (Utc::now() - started_at).num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
