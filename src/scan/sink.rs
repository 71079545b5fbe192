use std::sync::{Mutex, PoisonError};

use crate::core::types::ProbeResult;

/// Append-only result collection shared by every worker.
///
/// Iteration order carries no meaning and duplicates are kept.
#[derive(Debug, Default)]
pub struct ResultSink {
    results: Mutex<Vec<ProbeResult>>,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn add(&self, result: ProbeResult) {
        // A panicking observer on another worker must not lose results here.
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(result);
    }

    /// Copy of everything collected so far.
    pub fn snapshot(&self) -> Vec<ProbeResult> {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_results(self) -> Vec<ProbeResult> {
        self.results
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
