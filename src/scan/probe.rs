use log::debug;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

use crate::core::constants::{http, http_status, timeouts};
use crate::core::error::Result;

/// Issues a single request against a URL and reports its status.
///
/// Implementations must never panic or fail past their own boundary: any
/// transport problem is reported as [`http_status::TRANSPORT_FAILURE`].
pub trait Probe: Send + Sync {
    fn probe(&self, url: &str) -> i32;
}

impl<F> Probe for F
where
    F: Fn(&str) -> i32 + Send + Sync,
{
    fn probe(&self, url: &str) -> i32 {
        self(url)
    }
}

/// Options used to build an [`HttpProbe`].
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(timeouts::DEFAULT_PROBE_TIMEOUT_MS),
            user_agent: http::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HEAD-request probe backed by a blocking reqwest client.
///
/// The client is shared by every worker thread; reqwest pools connections
/// internally so one instance serves the whole scan.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(options: &ProbeOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .redirect(Policy::limited(http::MAX_REDIRECTS))
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

impl Probe for HttpProbe {
    fn probe(&self, url: &str) -> i32 {
        let status = match self.client.head(url).send() {
            Ok(res) => i32::from(res.status().as_u16()),
            Err(err) => {
                debug!("Probe of {url} failed: {err}");
                err.status()
                    .map(|s| i32::from(s.as_u16()))
                    .unwrap_or(http_status::TRANSPORT_FAILURE)
            }
        };

        debug!("{url} -> {status}");
        status
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::Server;
    use std::time::Instant;

    fn probe_with_timeout(timeout_ms: u64) -> HttpProbe {
        HttpProbe::new(&ProbeOptions {
            timeout: Duration::from_millis(timeout_ms),
            ..Default::default()
        })
        .expect("client should build")
    }

    #[test]
    fn test_probe__returns_200() {
        let mut server = Server::new();
        let _m = server.mock("HEAD", "/admin").with_status(200).create();
        let probe = probe_with_timeout(2000);

        assert_eq!(probe.probe(&(server.url() + "/admin")), 200);
    }

    #[test]
    fn test_probe__returns_404_as_data() {
        let mut server = Server::new();
        let _m = server.mock("HEAD", "/login.php").with_status(404).create();
        let probe = probe_with_timeout(2000);

        assert_eq!(probe.probe(&(server.url() + "/login.php")), 404);
    }

    #[test]
    fn test_probe__returns_500_as_data() {
        let mut server = Server::new();
        let _m = server.mock("HEAD", "/boom").with_status(500).create();
        let probe = probe_with_timeout(2000);

        assert_eq!(probe.probe(&(server.url() + "/boom")), 500);
    }

    #[test]
    fn test_probe__sends_head_with_user_agent() {
        let mut server = Server::new();
        let m = server
            .mock("HEAD", "/ua")
            .match_header("user-agent", http::DEFAULT_USER_AGENT)
            .with_status(200)
            .create();
        let probe = probe_with_timeout(2000);

        assert_eq!(probe.probe(&(server.url() + "/ua")), 200);
        m.assert();
    }

    #[test]
    fn test_probe__when_connection_refused__returns_sentinel() {
        let probe = probe_with_timeout(2000);
        let started = Instant::now();

        let status = probe.probe("http://127.0.0.1:1/unreachable");

        assert_eq!(status, http_status::TRANSPORT_FAILURE);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_probe__when_url_is_malformed__returns_sentinel() {
        let probe = probe_with_timeout(500);

        assert_eq!(probe.probe("not a url"), http_status::TRANSPORT_FAILURE);
    }

    #[test]
    fn test_closure_implements_probe() {
        let stub = |url: &str| if url.ends_with("/admin") { 200 } else { 404 };

        assert_eq!(stub.probe("http://test.local/admin"), 200);
        assert_eq!(stub.probe("http://test.local/other"), 404);
    }
}
