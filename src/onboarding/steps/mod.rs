//! Onboarding step forms
//!
//! Local field state and validation for the steps that collect input.
//! Welcome and Completed have no fields and no form.

pub mod about;
pub mod location;
pub mod personalization;
pub mod tool_stack;

pub use about::{AboutErrors, AboutForm};
pub use location::LocationForm;
pub use personalization::PersonalizationForm;
pub use tool_stack::ToolStackForm;
