//! Flowva - terminal onboarding wizard
//!
//! This library drives the Flowva onboarding flow: a fixed sequence of six
//! steps that collects who the user is, where they are based, which tools
//! they use, and what they want to improve. It can run interactively in a
//! terminal or headless from a scripted list of key presses.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-backed tracing setup
//! - `onboarding`: Step sequence, flow controller, forms, and completion modal
//! - `tui`: Terminal rendering, key handling, and script replay
//! - `display`: Plain-text output for summaries and listings
//! - `cli`: Command handlers behind the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use flowva::config::{FlowvaPaths, Settings};
//! use flowva::tui::{parse_keys, run_script};
//!
//! let paths = FlowvaPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let summary = run_script(&settings, &parse_keys("enter,space")?)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod onboarding;
pub mod tui;

pub use error::FlowvaError;
