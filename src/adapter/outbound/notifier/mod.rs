//! Notification adapters.
//!
//! Implements the `port::outbound::notifier::Notifier` trait for the
//! Telegram backend. Logging is handled by
//! [`crate::port::outbound::notifier::LogNotifier`].

#[cfg(feature = "telegram")]
pub mod telegram;
