//! Inbound (driving) ports consumed by inbound adapters such as the CLI and
//! the Telegram command surface.

pub mod query;
