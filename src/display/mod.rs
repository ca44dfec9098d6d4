//! Display formatting for terminal output
//!
//! Plain-text output for the non-interactive commands.

pub mod steps;
pub mod summary;

pub use steps::format_step_list;
pub use summary::format_summary;
