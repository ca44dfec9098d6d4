//! Onboarding wizard core
//!
//! The step sequence, the flow controller that walks it, the per-step forms,
//! and the completion modal. Nothing here knows about the terminal.

pub mod answers;
pub mod catalog;
pub mod modal;
pub mod scroll_lock;
pub mod selection;
pub mod step;
pub mod steps;
pub mod wizard;

pub use answers::{OnboardingSummary, Response, StepAnswer};
pub use modal::CompletionModal;
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use step::StepId;
pub use wizard::FlowController;
