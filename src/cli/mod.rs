//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the wizard and config layers.

pub mod config;
pub mod onboard;

pub use config::{handle_config, handle_init};
pub use onboard::{handle_replay, handle_start, handle_steps};
