//! End-of-scan summary for the console.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::constants::output_formats;
use crate::core::types::ProbeResult;
use crate::scan::scanner::ScanReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status_code: i32,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub base_url: String,
    pub visited: usize,
    pub workers: usize,
    pub elapsed_ms: u64,
    /// Per-status totals, ascending by status (`-1` first)
    pub status_counts: Vec<StatusCount>,
    /// Results whose status is in the report list, sorted by URL
    pub hits: Vec<ProbeResult>,
}

impl ScanSummary {
    pub fn from_report(base_url: &str, report: &ScanReport, report_codes: &[u16]) -> Self {
        let mut counts: FxHashMap<i32, usize> = FxHashMap::default();
        for result in &report.results {
            *counts.entry(result.status_code).or_default() += 1;
        }
        let mut status_counts: Vec<StatusCount> = counts
            .into_iter()
            .map(|(status_code, count)| StatusCount { status_code, count })
            .collect();
        status_counts.sort_by_key(|c| c.status_code);

        let mut hits: Vec<ProbeResult> = report
            .results
            .iter()
            .filter(|r| report_codes.iter().any(|&c| i32::from(c) == r.status_code))
            .cloned()
            .collect();
        hits.sort_by(|a, b| a.url.cmp(&b.url));

        Self {
            base_url: base_url.to_string(),
            visited: report.visited,
            workers: report.workers,
            elapsed_ms: u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
            status_counts,
            hits,
        }
    }

    pub fn render(&self, format: &str) -> String {
        match format {
            output_formats::JSON => self.render_json(),
            _ => self.render_text(),
        }
    }

    pub fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\nProbed {} URL(s) under {} with {} worker(s) in {}ms\n",
            self.visited, self.base_url, self.workers, self.elapsed_ms
        ));

        for StatusCount { status_code, count } in &self.status_counts {
            if *status_code < 0 {
                out.push_str(&format!("  no response: {count}\n"));
            } else {
                out.push_str(&format!("  {status_code}: {count}\n"));
            }
        }

        if self.hits.is_empty() {
            out.push_str("No hits\n");
        } else {
            out.push_str(&format!("\n> Hits ({})\n", self.hits.len()));
            for (i, hit) in self.hits.iter().enumerate() {
                out.push_str(&format!("{:4}. {}\n", i + 1, hit));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn report() -> ScanReport {
        ScanReport {
            results: vec![
                ProbeResult::new(404, "http://test.local/login.php"),
                ProbeResult::new(200, "http://test.local/zeta"),
                ProbeResult::new(-1, "http://test.local/x/y"),
                ProbeResult::new(200, "http://test.local/admin"),
            ],
            visited: 4,
            running: 0,
            completed: true,
            workers: 2,
            elapsed: Duration::from_millis(1500),
        }
    }

    #[test]
    fn test_summary_counts_and_hits() {
        let summary = ScanSummary::from_report("http://test.local/", &report(), &[200]);

        assert_eq!(
            summary.status_counts,
            vec![
                StatusCount {
                    status_code: -1,
                    count: 1
                },
                StatusCount {
                    status_code: 200,
                    count: 2
                },
                StatusCount {
                    status_code: 404,
                    count: 1
                },
            ]
        );
        assert_eq!(
            summary.hits,
            vec![
                ProbeResult::new(200, "http://test.local/admin"),
                ProbeResult::new(200, "http://test.local/zeta"),
            ]
        );
        assert_eq!(summary.elapsed_ms, 1500);
    }

    #[test]
    fn test_render_text() {
        let summary = ScanSummary::from_report("http://test.local/", &report(), &[200]);
        let text = summary.render(output_formats::TEXT);

        assert!(text.contains("Probed 4 URL(s) under http://test.local/ with 2 worker(s)"));
        assert!(text.contains("  no response: 1\n"));
        assert!(text.contains("  404: 1\n"));
        assert!(text.contains("   1. 200 http://test.local/admin\n"));
    }

    #[test]
    fn test_render_text_without_hits() {
        let summary = ScanSummary::from_report("http://test.local/", &report(), &[301]);

        assert!(summary.render_text().ends_with("No hits\n"));
    }

    #[test]
    fn test_render_json() {
        let summary = ScanSummary::from_report("http://test.local/", &report(), &[200]);
        let value: serde_json::Value =
            serde_json::from_str(&summary.render(output_formats::JSON)).unwrap();

        assert_eq!(value["visited"], 4);
        assert_eq!(value["workers"], 2);
        assert_eq!(value["hits"][0]["url"], "http://test.local/admin");
        assert_eq!(value["status_counts"][0]["status_code"], -1);
    }
}
