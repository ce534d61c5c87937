//! Scoped "no background scroll" resource
//!
//! Overlays that cover the page (modals, sheets) suppress scrolling of the
//! content underneath while they are visible. Each overlay holds a
//! [`ScrollLockGuard`]; the page is locked while at least one guard is alive,
//! so stacked overlays release correctly in any order and a guard dropped
//! during teardown can never leak the lock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared handle to the page scroll lock
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress background scrolling until the returned guard is dropped
    #[must_use = "the lock is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::SeqCst);
        if previous == 0 {
            tracing::debug!("background scroll locked");
        }
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Whether background scrolling is currently suppressed
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Number of live guards
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::SeqCst)
    }
}

/// Releases its share of the scroll lock on drop
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::SeqCst);
        if previous == 1 {
            tracing::debug!("background scroll released");
        }
    }
}
