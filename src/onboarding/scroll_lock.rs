//! Body scroll lock
//!
//! The wizard body can be scrolled unless an overlay holds the lock. The lock
//! is only taken through a [`ScrollLockGuard`], and dropping the guard always
//! releases it, whichever way its owner goes away.

use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to the page-level scroll flag
///
/// Counts live guards; scrolling stays disabled until the last one drops.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether scrolling is currently disabled
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// Disable scrolling until the returned guard is dropped
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.holders.get() + 1;
        self.holders.set(holders);
        tracing::debug!(holders, "scroll lock acquired");
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }
}

/// Holds the scroll lock; releases its hold on drop
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        tracing::debug!(holders, "scroll lock released");
    }
}
