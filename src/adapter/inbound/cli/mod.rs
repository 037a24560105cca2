//! CLI module graph.

pub mod available;
pub mod check;
pub mod command;
pub mod once;
pub mod output;
pub mod run;
