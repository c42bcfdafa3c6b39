//! Probe execution against check URLs.
//!
//! All probes share a single pooled HTTP client configured once with
//! the uniform total-request timeout. The client is cheap to clone
//! (internally reference counted) and safe for concurrent use; it
//! quiesces when the last probe holding a clone drops it.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Raw result of one probe round-trip.
///
/// Transport failures (DNS, connect refused, timeout, TLS) are carried
/// as `Failed` rather than surfaced as errors; a probe never raises to
/// its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResult {
    /// The round-trip completed; status and full body text.
    Response { status: u16, body: String },
    /// The round-trip did not complete.
    Failed(String),
}

/// Executes one probe against a URL.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn execute(&self, url: &str) -> RawResult;
}

/// `Prober` backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Build the shared client with a total-request timeout covering
    /// connect, send, and the full body read.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vigil/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn execute(&self, url: &str) -> RawResult {
        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                debug!(%url, error = %e, "probe request failed");
                return RawResult::Failed(e.to_string());
            }
        };

        let status = resp.status().as_u16();
        match resp.text().await {
            Ok(body) => RawResult::Response { status, body },
            Err(e) => {
                debug!(%url, error = %e, "probe body read failed");
                RawResult::Failed(e.to_string())
            }
        }
    }
}
