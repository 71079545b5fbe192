//! Concurrent directory and path brute-force scanner.
//!
//! A wordlist is split across a fixed pool of worker threads; each worker
//! sends HEAD requests for its share of paths against a base URL, results
//! are collected in a shared sink, and a monitor thread reports throughput
//! until every worker has finished.

pub mod config;
pub mod core;
pub mod reporting;
pub mod scan;
pub mod ui;
pub mod wordlist;

// Re-export commonly used items
pub use config::{CliConfig, Config};
pub use crate::core::{ProbeResult, Result, ScanError};
pub use scan::{HttpProbe, Probe, ProbeObserver, ScanReport, Scanner};
pub use wordlist::{load_wordlist, load_wordlist_lossy};
