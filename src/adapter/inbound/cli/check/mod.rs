//! Configuration and connectivity check handlers.

pub mod config;
pub mod telegram;
