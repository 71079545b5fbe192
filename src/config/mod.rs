//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use log::debug;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{defaults, http, http_status, output_formats, timeouts};
use crate::core::error::{Result, ScanError};
use crate::scan::pool::worker_count;
use crate::scan::probe::ProbeOptions;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Target server root every wordlist entry is appended to
    pub base_url: Option<String>,

    /// Wordlist file, one path per line
    pub wordlist: Option<String>,

    /// Explicit number of worker threads
    pub threads: Option<usize>,

    /// Workers per hardware thread when `threads` is unset
    pub thread_multiplier: Option<usize>,

    /// Per-request timeout in milliseconds
    pub timeout_ms: Option<u64>,

    /// User-Agent header sent with every probe
    pub user_agent: Option<String>,

    /// Status codes printed as hits while scanning
    pub report_status_codes: Option<Vec<u16>>,

    /// Summary format (text, json)
    pub output_format: Option<String>,

    /// Print periodic progress lines
    pub progress: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            wordlist: Some(defaults::WORDLIST.to_string()),
            threads: None, // Will default to CPU cores times the multiplier
            thread_multiplier: Some(defaults::THREAD_MULTIPLIER),
            timeout_ms: Some(timeouts::DEFAULT_PROBE_TIMEOUT_MS),
            user_agent: Some(http::DEFAULT_USER_AGENT.to_string()),
            report_status_codes: Some(vec![http_status::OK]),
            output_format: Some(output_formats::DEFAULT.to_string()),
            progress: Some(true),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScanError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ScanError::TomlParsing {
                path: path.display().to_string(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        match std::env::current_dir() {
            Ok(dir) => Self::load_from_dir(&dir),
            Err(_) => Self::default(),
        }
    }

    /// Look for the config file in `dir` and up to three of its parents.
    pub fn load_from_dir(dir: &Path) -> Self {
        for ancestor in dir.ancestors().take(defaults::CONFIG_SEARCH_DEPTH + 1) {
            let candidate = ancestor.join(defaults::CONFIG_FILE_NAME);
            if !candidate.is_file() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => {
                    debug!("Loaded config from {}", candidate.display());
                    return config;
                }
                Err(e) => debug!("Ignoring {}: {e}", candidate.display()),
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Target
        if let Some(ref base_url) = cli_config.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(ref wordlist) = cli_config.wordlist {
            self.wordlist = Some(wordlist.clone());
        }

        // Workers & network
        if let Some(threads) = cli_config.threads {
            self.threads = Some(threads);
        }
        if let Some(multiplier) = cli_config.thread_multiplier {
            self.thread_multiplier = Some(multiplier);
        }
        if let Some(timeout_ms) = cli_config.timeout_ms {
            self.timeout_ms = Some(timeout_ms);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }

        // Output
        if let Some(ref codes) = cli_config.report_status_codes {
            self.report_status_codes = Some(codes.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.no_progress {
            self.progress = Some(false);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Base URL guaranteed to end in `/`.
    pub fn normalized_base_url(&self) -> Result<String> {
        let raw = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ScanError::Config("No base URL provided".to_string()))?;

        let url = Url::parse(raw)
            .map_err(|e| ScanError::Config(format!("Invalid base URL '{raw}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ScanError::Config(format!(
                "Base URL '{raw}' must use http or https"
            )));
        }

        if raw.ends_with('/') {
            Ok(raw.to_string())
        } else {
            Ok(format!("{raw}/"))
        }
    }

    pub fn wordlist_path(&self) -> &str {
        self.wordlist.as_deref().unwrap_or(defaults::WORDLIST)
    }

    /// Number of worker threads for this configuration
    pub fn worker_count(&self) -> usize {
        worker_count(
            self.threads,
            self.thread_multiplier
                .unwrap_or(defaults::THREAD_MULTIPLIER),
        )
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(
            self.timeout_ms
                .unwrap_or(timeouts::DEFAULT_PROBE_TIMEOUT_MS),
        )
    }

    pub fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            timeout: self.timeout_duration(),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| http::DEFAULT_USER_AGENT.to_string()),
        }
    }

    pub fn report_codes(&self) -> Vec<u16> {
        self.report_status_codes
            .clone()
            .unwrap_or_else(|| vec![http_status::OK])
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    pub fn progress_enabled(&self) -> bool {
        self.progress.unwrap_or(true)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout_ms) = self.timeout_ms
            && timeout_ms == 0
        {
            return Err(ScanError::Config(
                "Timeout cannot be 0. Expected a positive number of milliseconds.".to_string(),
            ));
        }

        if let Some(threads) = self.threads
            && threads == 0
        {
            return Err(ScanError::Config(
                "Thread count cannot be 0. Expected a positive integer.".to_string(),
            ));
        }

        if let Some(multiplier) = self.thread_multiplier
            && multiplier == 0
        {
            return Err(ScanError::Config(
                "Thread multiplier cannot be 0. Expected a positive integer.".to_string(),
            ));
        }

        if let Some(ref codes) = self.report_status_codes {
            for &code in codes {
                if !(100..=599).contains(&code) {
                    return Err(ScanError::Config(format!(
                        "Status code {code} is not a valid HTTP status code. Expected a number between 100-599."
                    )));
                }
            }
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(ScanError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if self.base_url.is_some() {
            self.normalized_base_url()?;
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Target
    pub base_url: Option<String>,
    pub wordlist: Option<String>, // --wordlist

    // Workers & network
    pub threads: Option<usize>,           // --threads
    pub thread_multiplier: Option<usize>, // --thread-multiplier
    pub timeout_ms: Option<u64>,          // --timeout
    pub user_agent: Option<String>,       // --user-agent

    // Output
    pub report_status_codes: Option<Vec<u16>>, // --report-status
    pub output_format: Option<String>,         // --format
    pub no_progress: bool,                     // --no-progress
    pub quiet: bool,                           // --quiet
    pub verbose: bool,                         // --verbose

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
