use log::info;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::ProbeResult;
use crate::scan::counters::ScanCounters;
use crate::scan::monitor::ProgressMonitor;
use crate::scan::notify::{ProbeObserver, StatusReporter};
use crate::scan::partition::split;
use crate::scan::pool::WorkerPool;
use crate::scan::probe::{HttpProbe, Probe};
use crate::scan::sink::ResultSink;

/// Everything known once a scan has finished.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub results: Vec<ProbeResult>,
    pub visited: usize,
    /// Running workers as observed after the pool drained
    pub running: usize,
    pub completed: bool,
    pub workers: usize,
    pub elapsed: Duration,
}

/// Runs one wordlist against one base URL.
pub struct Scanner {
    probe: Arc<dyn Probe>,
    workers: usize,
    observers: Vec<Arc<dyn ProbeObserver>>,
    progress: bool,
    progress_interval: Option<Duration>,
}

impl Scanner {
    pub fn new(probe: Arc<dyn Probe>, workers: usize) -> Self {
        Self {
            probe,
            workers,
            observers: Vec::new(),
            progress: false,
            progress_interval: None,
        }
    }

    /// Scanner with an HTTP probe and the console reporter, as configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let probe = HttpProbe::new(&config.probe_options())?;
        let reporter = StatusReporter::new(&config.report_codes());

        Ok(Self::new(Arc::new(probe), config.worker_count())
            .with_observer(Arc::new(reporter))
            .with_progress(config.progress_enabled()))
    }

    pub fn with_observer(mut self, observer: Arc<dyn ProbeObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = Some(interval);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Probe every path and block until all workers have exited.
    pub fn run(&self, base_url: &str, paths: &[String]) -> Result<ScanReport> {
        let started = Instant::now();
        let chunks = split(paths, self.workers)?;
        let counters = Arc::new(ScanCounters::new());
        let sink = Arc::new(ResultSink::with_capacity(paths.len()));

        info!(
            "Scanning {} with {} paths across {} workers",
            base_url,
            paths.len(),
            self.workers
        );

        let monitor = if self.progress {
            let mut monitor = ProgressMonitor::new(Arc::clone(&counters), started);
            if let Some(interval) = self.progress_interval {
                monitor = monitor.with_interval(interval);
            }
            Some(monitor.spawn()?)
        } else {
            None
        };

        let pool = WorkerPool::new(
            Arc::clone(&self.probe),
            Arc::clone(&counters),
            Arc::clone(&sink),
            self.observers.clone(),
        );
        let outcome = pool.run_to_completion(base_url, chunks);

        // Workers are gone; the monitor's drain condition already holds.
        if let Some(monitor) = monitor {
            monitor.stop();
        }
        outcome?;

        let elapsed = started.elapsed();
        info!(
            "Scan finished: {} probes in {:.2}s",
            counters.visited(),
            elapsed.as_secs_f64()
        );

        Ok(ScanReport {
            results: sink.snapshot(),
            visited: counters.visited(),
            running: counters.running(),
            completed: counters.is_completed(),
            workers: self.workers,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::Server;

    #[test]
    fn test_run__empty_wordlist_still_completes() {
        let scanner = Scanner::new(Arc::new(|_: &str| 200), 4);

        let report = scanner.run("http://test.local/", &[]).unwrap();

        assert!(report.results.is_empty());
        assert_eq!(report.visited, 0);
        assert_eq!(report.running, 0);
        assert!(report.completed);
        assert_eq!(report.workers, 4);
    }

    #[test]
    fn test_run__zero_workers_is_rejected() {
        let scanner = Scanner::new(Arc::new(|_: &str| 200), 0);

        assert!(scanner.run("http://test.local/", &[]).is_err());
    }

    #[test]
    fn test_run__with_progress_monitor() {
        let scanner = Scanner::new(Arc::new(|_: &str| 404), 3)
            .with_progress(true)
            .with_progress_interval(Duration::from_millis(5));
        let paths: Vec<String> = (0..30).map(|i| format!("p{i}")).collect();

        let report = scanner.run("http://test.local/", &paths).unwrap();

        assert_eq!(report.visited, 30);
        assert_eq!(report.results.len(), 30);
        assert!(report.completed);
    }

    #[test]
    fn test_from_config__probes_real_server() {
        let mut server = Server::new();
        let _admin = server.mock("HEAD", "/admin").with_status(200).create();
        let _missing = server.mock("HEAD", "/missing").with_status(404).create();
        let config = Config {
            base_url: Some(server.url()),
            threads: Some(2),
            progress: Some(false),
            ..Default::default()
        };
        let scanner = Scanner::from_config(&config).unwrap();
        let base_url = config.normalized_base_url().unwrap();

        let mut report = scanner
            .run(&base_url, &["/admin".to_string(), "missing".to_string()])
            .unwrap();
        report.results.sort_by(|a, b| a.url.cmp(&b.url));

        assert_eq!(
            report.results,
            vec![
                ProbeResult::new(200, format!("{}/admin", server.url())),
                ProbeResult::new(404, format!("{}/missing", server.url())),
            ]
        );
        assert_eq!(scanner.workers(), 2);
    }
}
