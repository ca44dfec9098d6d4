//! Terminal User Interface module
//!
//! This module renders the onboarding wizard with ratatui. Each step has a
//! screen that turns key presses into form updates or advance requests; the
//! app routes those to the flow controller.

pub mod app;
pub mod event;
pub mod handler;
pub mod script;
pub mod terminal;

// Step screens
pub mod screens;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use script::{parse_keys, run_script};
pub use terminal::run_tui;
