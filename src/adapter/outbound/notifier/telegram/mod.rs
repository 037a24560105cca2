//! Telegram notification and command handling.
//!
//! Announces newly available products to a chat and answers bot commands
//! such as `/available` from the same chat.

mod auth;
mod command;
mod format;

pub mod control;
pub mod notifier;
