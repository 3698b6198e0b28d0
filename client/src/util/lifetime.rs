//! Cancellation flag scoped to a mounted component.
//!
//! A page creates a [`MountLifetime`], hands a clone to its async task, and
//! cancels it from `on_cleanup`. The task checks the flag after every await
//! and drops its result once the page is gone.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountLifetime {
    alive: Arc<AtomicBool>,
}

impl MountLifetime {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Mark the owning component as torn down. Idempotent.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        !self.alive.load(Ordering::Relaxed)
    }
}

impl Default for MountLifetime {
    fn default() -> Self {
        Self::new()
    }
}
