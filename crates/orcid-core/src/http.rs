//! Blocking JSON GET over the ORCID public API.
//!
//! Uses async reqwest internally, driven by a shared tokio runtime, but
//! presents a sync interface: every call blocks the caller until the
//! response body is parsed or the request fails.

use std::sync::LazyLock;
use std::time::Duration;

use serde_json::Value;

use crate::error::OrcidError;

/// Headers sent with every request
pub const BASE_HEADERS: [(&str, &str); 2] = [
    ("Accept", "application/orcid+json"),
    ("Content-Type", "application/json;charset=UTF-8"),
];

/// Shared tokio runtime for HTTP operations.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// Source of JSON documents keyed by absolute URL.
///
/// [`HttpFetcher`] is the network implementation; tests substitute a
/// recording fake to count and order requests.
pub trait Fetch: Send + Sync {
    fn get_json(&self, url: &str) -> Result<Value, OrcidError>;
}

/// reqwest-backed [`Fetch`] with request and connect timeouts
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, OrcidError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| OrcidError::from_reqwest(&e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get_json(&self, url: &str) -> Result<Value, OrcidError> {
        log::debug!("GET {url}");
        let body = SHARED_RUNTIME
            .handle()
            .block_on(async {
                let mut request = self.client.get(url);
                for (name, value) in BASE_HEADERS {
                    request = request.header(name, value);
                }
                let resp = request.send().await?.error_for_status()?;
                resp.text().await
            })
            .map_err(|e| OrcidError::from_reqwest(&e))?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Call-scoped logging detail for response dumps.
///
/// A verbose scope logs response bodies at INFO so they show under the
/// default filter; otherwise they go to DEBUG. The global logger is never
/// reconfigured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestLog {
    verbose: bool,
}

impl RequestLog {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub const fn level(&self) -> log::Level {
        if self.verbose {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }

    /// Pretty-print a response body under `label` (e.g. "BASE", "WORKS")
    pub fn response(&self, label: &str, url: &str, body: &Value) {
        let level = self.level();
        if log::log_enabled!(level) {
            let pretty = serde_json::to_string_pretty(body).unwrap_or_default();
            log::log!(level, "RESPONSE ({label}) {url}: {pretty}");
        }
    }
}
