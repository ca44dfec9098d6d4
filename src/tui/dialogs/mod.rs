//! Dialog modules for the TUI
//!
//! Overlays drawn on top of the wizard card

pub mod completion;
pub mod help;
