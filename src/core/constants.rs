/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - human readable summary
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, JSON];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - successful response
    pub const OK: u16 = 200;
    /// Marker status for probes that got no usable HTTP response
    pub const TRANSPORT_FAILURE: i32 = -1;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Per-request timeout in milliseconds
    pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 2000;
    /// Interval between progress reports in milliseconds
    pub const PROGRESS_INTERVAL_MS: u64 = 1000;
}

/// HTTP client constants
pub mod http {
    /// Browser-like User-Agent sent with every probe
    pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
    /// Maximum number of redirects followed per probe
    pub const MAX_REDIRECTS: usize = 10;
}

/// Default configuration values
pub mod defaults {
    /// Oversubscription factor applied to the hardware parallelism
    pub const THREAD_MULTIPLIER: usize = 5;
    /// Wordlist read when none is configured
    pub const WORDLIST: &str = "wordlist.txt";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".dirprobe.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}
