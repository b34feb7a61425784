//! Row store access: load tool records and pick which URLs to probe
//!
//! The directory keeps one row per listed tool in a Supabase `tools` table.
//! We read it through the PostgREST interface; this component never writes.

use crate::config::AuditConfig;
use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;

/// One directory entry. A record carries up to two outbound URLs:
/// the tool's own website and an optional affiliate link.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub website_url: Option<String>,
    pub affiliate_url: Option<String>,
}

impl Record {
    /// URLs worth probing, in report order: affiliate link first (it is the
    /// one visitors actually follow), then the plain website URL.
    ///
    /// Only absolute http(s) URLs qualify; empty strings, relative paths,
    /// and other schemes are skipped silently since there is nothing to
    /// check, not an error to report.
    pub fn probe_targets(&self) -> Vec<&str> {
        [self.affiliate_url.as_deref(), self.website_url.as_deref()]
            .into_iter()
            .flatten()
            .filter(|url| is_probeable(url))
            .collect()
    }
}

/// True if the string is an absolute URL with an http or https scheme.
/// Case-insensitive on the scheme, like the browser address bar.
fn is_probeable(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetch every tool row, ordered by name ascending (case rules are the
/// store's). An empty table is a valid, empty result.
pub async fn fetch_tools(client: &Client, config: &AuditConfig) -> Result<Vec<Record>> {
    let url = format!(
        "{}/rest/v1/tools?select=id,name,website_url,affiliate_url&order=name.asc",
        config.base_url.trim_end_matches('/')
    );

    let response = client
        .get(&url)
        .header("apikey", &config.api_key)
        .bearer_auth(&config.api_key)
        .send()
        .await
        .context("Failed to fetch tools")?;

    if !response.status().is_success() {
        bail!(
            "Failed to fetch tools: {} - {}",
            response.status(),
            response.text().await.unwrap_or_default()
        );
    }

    let records: Vec<Record> = response
        .json()
        .await
        .context("Failed to parse tools response")?;
    Ok(records)
}
