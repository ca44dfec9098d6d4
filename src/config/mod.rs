//! Configuration module for Flowva
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::FlowvaPaths;
pub use settings::{Settings, SummaryFormat};
