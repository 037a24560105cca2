//! Command-line interface definitions.
//!
//! Defines the CLI structure for the restock application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catalog availability watcher with chat notifications
#[derive(Parser, Debug)]
#[command(name = "restock")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the restock CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the catalog on the configured interval and run the chat bot
    Run,

    /// Run a single availability check and print any restocked products
    Once,

    /// Fetch the catalog and list products available right now
    Available,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `restock check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config,
    /// Test Telegram notification delivery.
    Telegram,
}
