//! Reporting
//!
//! This module handles structured logging and the end-of-scan summary.

pub mod logging;
pub mod summary;

// Re-export commonly used items
pub use summary::{ScanSummary, StatusCount};
