//! Infrastructure configuration modules.

pub mod logging;
pub mod poll;
pub mod settings;
pub mod telegram;
