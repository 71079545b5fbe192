//! Shared scan counters and completion detection.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Counters shared by the worker pool and the progress monitor.
///
/// `running` tracks live workers, `visited` counts attempted probes
/// (transport failures included). `completed` flips to true exactly once,
/// set by the worker whose exit brings `running` down to zero.
#[derive(Debug, Default)]
pub struct ScanCounters {
    running: AtomicUsize,
    visited: AtomicUsize,
    completed: AtomicBool,
}

impl ScanCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `count` workers as running before any of them starts probing.
    pub fn workers_started(&self, count: usize) {
        self.running.fetch_add(count, Ordering::SeqCst);
    }

    /// Mark one worker as finished.
    ///
    /// Returns true only for the caller that observed the transition to zero;
    /// that caller has also set the completion flag.
    pub fn worker_finished(&self) -> bool {
        let previous = self
            .running
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));

        match previous {
            Ok(1) => {
                self.completed.store(true, Ordering::SeqCst);
                true
            }
            Ok(_) => false,
            // Already at zero: an unbalanced call, never let the count wrap.
            Err(_) => false,
        }
    }

    pub fn probe_visited(&self) {
        self.visited.fetch_add(1, Ordering::Relaxed);
    }

    pub fn running(&self) -> usize {
        self.running.load(Ordering::SeqCst)
    }

    pub fn visited(&self) -> usize {
        self.visited.load(Ordering::Relaxed)
    }

    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }

    /// True while the monitor should keep reporting.
    pub fn is_draining(&self) -> bool {
        !self.is_completed() || self.running() > 0
    }
}
