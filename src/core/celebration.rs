//! Time-boxed celebratory effect shown after a successful generation.
//!
//! Each trigger arms its own timer. Timers are never cancelled: an earlier
//! timer still switches the effect off at its deadline even if a later
//! generation re-triggered it in between.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::time::Instant;

/// How long the effect stays on after a trigger.
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Celebration {
    active: Arc<AtomicBool>,
    duration: Duration,
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new(CELEBRATION_DURATION)
    }
}

impl Celebration {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
            duration,
        }
    }

    /// Switch the effect on and arm a timer to switch it off.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&self) {
        self.active.store(true, Ordering::SeqCst);

        let active = Arc::clone(&self.active);
        let deadline = Instant::now() + self.duration;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            active.store(false, Ordering::SeqCst);
        });
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}
