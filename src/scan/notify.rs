//! Per-request notification.
//!
//! Observers are called synchronously on the worker thread right after each
//! probe, before that worker moves on to its next path. They are shared by all
//! workers, so implementations must tolerate concurrent calls.

use rustc_hash::FxHashSet;
use std::io::{self, Write};

use crate::core::types::ProbeResult;

pub trait ProbeObserver: Send + Sync {
    fn on_probe(&self, result: &ProbeResult);

    /// Called once, by the last worker to exit.
    fn on_complete(&self) {}
}

impl<F> ProbeObserver for F
where
    F: Fn(&ProbeResult) + Send + Sync,
{
    fn on_probe(&self, result: &ProbeResult) {
        self(result)
    }
}

/// Console subscriber printing hits and the completion line.
#[derive(Debug, Clone)]
pub struct StatusReporter {
    report_codes: FxHashSet<i32>,
}

impl StatusReporter {
    pub fn new(report_codes: &[u16]) -> Self {
        Self {
            report_codes: report_codes.iter().map(|&c| i32::from(c)).collect(),
        }
    }

    pub fn should_report(&self, result: &ProbeResult) -> bool {
        self.report_codes.contains(&result.status_code)
    }

    pub fn format_hit(result: &ProbeResult) -> String {
        format!("Accessed {}, status: {}", result.url, result.status_code)
    }
}

impl ProbeObserver for StatusReporter {
    fn on_probe(&self, result: &ProbeResult) {
        if self.should_report(result) {
            // Output from concurrent workers may interleave; a closed stdout is ignored.
            let _ = writeln!(io::stdout(), "{}", Self::format_hit(result));
        }
    }

    fn on_complete(&self) {
        let _ = writeln!(io::stdout(), "Scan complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::http_status;
    use std::sync::Mutex;

    #[test]
    fn test_default_reporter_only_reports_200() {
        let reporter = StatusReporter::new(&[http_status::OK]);

        assert!(reporter.should_report(&ProbeResult::new(200, "http://test.local/a")));
        assert!(!reporter.should_report(&ProbeResult::new(404, "http://test.local/b")));
        assert!(!reporter.should_report(&ProbeResult::new(-1, "http://test.local/c")));
    }

    #[test]
    fn test_reporter_with_custom_codes() {
        let reporter = StatusReporter::new(&[200, 301, 403]);

        assert!(reporter.should_report(&ProbeResult::new(403, "http://test.local/a")));
        assert!(reporter.should_report(&ProbeResult::new(301, "http://test.local/b")));
        assert!(!reporter.should_report(&ProbeResult::new(500, "http://test.local/c")));
    }

    #[test]
    fn test_format_hit() {
        let result = ProbeResult::new(200, "http://test.local/admin");
        assert_eq!(
            StatusReporter::format_hit(&result),
            "Accessed http://test.local/admin, status: 200"
        );
    }

    #[test]
    fn test_closure_observer_receives_results() {
        let seen = Mutex::new(Vec::new());
        let observer = |result: &ProbeResult| seen.lock().unwrap().push(result.clone());

        observer.on_probe(&ProbeResult::new(200, "http://test.local/a"));
        observer.on_complete();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![ProbeResult::new(200, "http://test.local/a")]
        );
    }
}
