use serde::Serialize;
use std::fmt;

use crate::core::constants::http_status;

/// Outcome of probing a single candidate URL.
///
/// `status_code` holds the HTTP status returned by the server, or
/// [`http_status::TRANSPORT_FAILURE`] (`-1`) when no usable response was
/// obtained (timeout, DNS failure, refused connection, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProbeResult {
    /// HTTP status, or `-1` for a transport failure
    pub status_code: i32,
    /// Full URL that was probed
    pub url: String,
}

impl ProbeResult {
    pub fn new(status_code: i32, url: impl Into<String>) -> Self {
        Self {
            status_code,
            url: url.into(),
        }
    }

    /// True when the server answered with 200 OK.
    pub fn is_ok(&self) -> bool {
        self.status_code == i32::from(http_status::OK)
    }

    /// True when no HTTP response was obtained at all.
    pub fn is_transport_failure(&self) -> bool {
        self.status_code == http_status::TRANSPORT_FAILURE
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.status_code, self.url)
    }
}

/// Strip a single leading `/` from a wordlist entry.
///
/// # Examples
/// ```
/// use dirprobe::core::types::normalize_path;
///
/// assert_eq!(normalize_path("/admin"), "admin");
/// assert_eq!(normalize_path("login.php"), "login.php");
/// assert_eq!(normalize_path("//double"), "/double");
/// ```
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Build the full URL for a wordlist entry. `base_url` is expected to end in `/`.
pub fn join_url(base_url: &str, path: &str) -> String {
    let path = normalize_path(path);
    let mut url = String::with_capacity(base_url.len() + path.len());
    url.push_str(base_url);
    url.push_str(path);
    url
}
