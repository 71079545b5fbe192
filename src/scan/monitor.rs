//! Background progress reporting.
//!
//! The monitor polls the shared counters on a fixed tick and reports the number
//! of running workers and the observed throughput until the scan has drained.

use crossbeam_channel::{Receiver, Sender, bounded, select, tick};
use log::error;
use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::core::constants::timeouts;
use crate::core::error::Result;
use crate::scan::counters::ScanCounters;

/// One progress observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub running: usize,
    /// Visited URLs per whole elapsed second, truncated
    pub throughput: usize,
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Currently running threads: {}, URLs/sec: {}",
            self.running, self.throughput
        )
    }
}

type Reporter = Box<dyn Fn(ProgressSnapshot) + Send>;

pub struct ProgressMonitor {
    counters: Arc<ScanCounters>,
    started: Instant,
    interval: Duration,
    reporter: Reporter,
}

impl ProgressMonitor {
    /// Monitor printing to stdout once per second.
    pub fn new(counters: Arc<ScanCounters>, started: Instant) -> Self {
        Self {
            counters,
            started,
            interval: Duration::from_millis(timeouts::PROGRESS_INTERVAL_MS),
            reporter: Box::new(|snapshot| println!("{snapshot}")),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_reporter<F>(mut self, reporter: F) -> Self
    where
        F: Fn(ProgressSnapshot) + Send + 'static,
    {
        self.reporter = Box::new(reporter);
        self
    }

    /// Current progress, or `None` while less than a second has elapsed.
    pub fn sample(&self) -> Option<ProgressSnapshot> {
        let seconds = self.started.elapsed().as_secs() as usize;
        if seconds == 0 {
            return None;
        }

        Some(ProgressSnapshot {
            running: self.counters.running(),
            throughput: self.counters.visited() / seconds,
        })
    }

    pub fn spawn(self) -> Result<MonitorHandle> {
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);
        let handle = thread::Builder::new()
            .name("progress-monitor".to_string())
            .spawn(move || self.run(shutdown_rx))?;

        Ok(MonitorHandle {
            shutdown: shutdown_tx,
            handle,
        })
    }

    fn run(self, shutdown: Receiver<()>) {
        let ticker = tick(self.interval);

        while self.counters.is_draining() {
            if let Some(snapshot) = self.sample() {
                (self.reporter)(snapshot);
            }

            // `shutdown` never carries a message; it disconnects when stopped.
            let stopped = select! {
                recv(ticker) -> _ => false,
                recv(shutdown) -> _ => true,
            };
            if stopped {
                break;
            }
        }
    }
}

/// Owner side of a running monitor.
pub struct MonitorHandle {
    shutdown: Sender<()>,
    handle: JoinHandle<()>,
}

impl MonitorHandle {
    /// Wait for the monitor to observe the end of the scan.
    pub fn join(self) {
        let MonitorHandle { shutdown, handle } = self;
        if handle.join().is_err() {
            error!("Progress monitor panicked");
        }
        drop(shutdown);
    }

    /// Stop the monitor without waiting for the next tick.
    pub fn stop(self) {
        let MonitorHandle { shutdown, handle } = self;
        drop(shutdown);
        if handle.join().is_err() {
            error!("Progress monitor panicked");
        }
    }
}
