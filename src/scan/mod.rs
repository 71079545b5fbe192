//! Concurrent scanning engine
//!
//! The wordlist is split into one contiguous chunk per worker thread. Each
//! worker probes its chunk in order, records results in the shared sink,
//! notifies observers and bumps the shared counters. A monitor thread reports
//! progress from those counters until the last worker has exited.

pub mod counters;
pub mod monitor;
pub mod notify;
pub mod partition;
pub mod pool;
pub mod probe;
pub mod scanner;
pub mod sink;

// Re-export commonly used items
pub use counters::ScanCounters;
pub use monitor::{MonitorHandle, ProgressMonitor, ProgressSnapshot};
pub use notify::{ProbeObserver, StatusReporter};
pub use pool::{WorkerPool, worker_count};
pub use probe::{HttpProbe, Probe, ProbeOptions};
pub use scanner::{ScanReport, Scanner};
pub use sink::ResultSink;
