//! The audit pass: load records, probe each link in order, report
//!
//! Strictly sequential by design. The directory points at third-party
//! sites we have no relationship with, so politeness beats throughput:
//! one probe at a time with a fixed delay between probes. The job runs
//! from cron or a developer shell, never on a request path.

use crate::config::AuditConfig;
use crate::probe;
use crate::report::{self, AuditReport};
use crate::store;
use anyhow::{Context, Result};
use std::pin::pin;
use std::time::Duration;

/// Tunables for one audit pass.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Pause between consecutive probes.
    pub delay: Duration,
    /// Per-request timeout for probes and the store fetch.
    pub timeout: Duration,
    /// Emit the report as compact JSON instead of per-failure lines.
    pub json: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
            timeout: Duration::from_secs(10),
            json: false,
        }
    }
}

/// Run one complete audit pass and print the report.
///
/// Broken links are not an error: the returned report carries the counts
/// and the process still exits 0. Only setup problems (bad config, store
/// unreachable) surface as `Err`.
pub async fn run_audit(config: &AuditConfig, opts: &AuditOptions) -> Result<AuditReport> {
    let client =
        probe::build_client(opts.timeout).context("Failed to create HTTP client")?;

    let records = store::fetch_tools(&client, config).await?;
    eprintln!("Loaded {} tool(s)", records.len());

    let targets: Vec<(&store::Record, &str)> = records
        .iter()
        .flat_map(|r| r.probe_targets().into_iter().map(move |url| (r, url)))
        .collect();

    eprintln!("Checking {} link(s)...", targets.len());

    let mut report = AuditReport::default();
    let color = report::stdout_is_terminal();
    // Armed once; after it fires we are already done looping.
    let mut interrupt = pin!(tokio::signal::ctrl_c());

    let total = targets.len();
    for (i, (record, url)) in targets.iter().enumerate() {
        eprintln!("  -> {}", truncate(url, 60));

        let result = tokio::select! {
            _ = &mut interrupt => {
                eprintln!("Interrupted, stopping early");
                break;
            }
            result = probe::probe(&client, url) => result,
        };

        if let Some(failure) = report.record(record, url, result) {
            if !opts.json {
                println!("{}", report::format_failure(failure, color));
            }
        }

        // Pace between probes; the final target gets no trailing delay.
        if i + 1 < total {
            tokio::select! {
                _ = &mut interrupt => {
                    eprintln!("Interrupted, stopping early");
                    break;
                }
                _ = tokio::time::sleep(opts.delay) => {}
            }
        }
    }

    let summary = report::format_summary(&report, color);
    if opts.json {
        println!("{}", serde_json::to_string(&report)?);
        eprintln!("{}", summary);
    } else {
        println!("{}", summary);
    }

    Ok(report)
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    // Store URLs are arbitrary UTF-8; back the cut off to a char boundary
    // so a multi-byte character at the limit cannot panic the slice.
    let mut cut = max - 3;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}
