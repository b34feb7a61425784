//! Link probing: one HEAD request per URL, classified into ok/failed
//!
//! Classification is deliberately lenient: plenty of servers reject HEAD
//! with 405 or answer 403 to non-browser clients while the page itself is
//! fine, so only a definitive 404 counts as a broken link. Transport-level
//! failures (DNS, refused, TLS, timeout) have no status to report and are
//! failures too.

use reqwest::{redirect, Client, StatusCode};
use std::time::Duration;

/// Redirect chains longer than this classify as failed.
const MAX_REDIRECTS: usize = 10;

const USER_AGENT: &str = concat!("audit-links/", env!("CARGO_PKG_VERSION"));

/// Verdict for a single probed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    pub ok: bool,
    /// HTTP status when a response was received; `None` for transport errors.
    pub status: Option<u16>,
}

/// Build the shared HTTP client used for probes and the store fetch.
///
/// The request timeout bounds every probe so a black-holed host cannot
/// hang the run.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .build()
}

/// Probe one URL with a HEAD request, following redirects.
///
/// Never fails: every outcome, including a panic-free transport error,
/// comes back as a classification.
pub async fn probe(client: &Client, url: &str) -> ProbeResult {
    match client.head(url).send().await {
        Ok(response) => classify_status(response.status()),
        Err(_) => ProbeResult {
            ok: false,
            status: None,
        },
    }
}

fn classify_status(status: StatusCode) -> ProbeResult {
    ProbeResult {
        ok: status != StatusCode::NOT_FOUND,
        status: Some(status.as_u16()),
    }
}
