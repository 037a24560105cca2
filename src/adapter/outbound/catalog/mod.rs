//! Remote catalog adapter.
//!
//! Implements [`crate::port::outbound::catalog::CatalogFetcher`] over HTTP.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::CatalogClient;
pub use settings::CatalogConfig;
