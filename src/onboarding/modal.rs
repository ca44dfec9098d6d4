//! Completion modal state
//!
//! The modal follows the controller's visibility flag. While it is shown it
//! owns the body scroll lock.

use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use super::wizard::FlowController;

pub const TITLE: &str = "Onboarding Complete!";
pub const MESSAGE: &str = "Taking you to your dashboard now.";

/// Completion modal
#[derive(Debug)]
pub struct CompletionModal {
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl CompletionModal {
    /// Create a hidden modal bound to the page's scroll lock
    pub fn new(lock: ScrollLock) -> Self {
        Self { lock, guard: None }
    }

    pub fn is_visible(&self) -> bool {
        self.guard.is_some()
    }

    /// Bring the modal in line with the visibility flag
    ///
    /// Showing takes the scroll lock; hiding releases it.
    pub fn sync(&mut self, visible: bool) {
        match (visible, self.guard.is_some()) {
            (true, false) => {
                self.guard = Some(self.lock.acquire());
                tracing::info!("completion modal shown");
            }
            (false, true) => {
                self.guard = None;
                tracing::info!("completion modal hidden");
            }
            _ => {}
        }
    }

    /// The "OK" button: negate the controller's visibility flag
    pub fn acknowledge(&mut self, flow: &mut FlowController) {
        flow.toggle_modal();
        self.sync(flow.modal_visible());
    }
}
