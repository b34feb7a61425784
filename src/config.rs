//! Runtime configuration for the auditor
//!
//! Credentials come from the same environment variables the website build
//! uses, so the script works unchanged in CI and on a developer machine.

use anyhow::{bail, Result};
use std::env;

/// Environment variable holding the Supabase project URL.
pub const BASE_URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
/// Environment variable holding the anon (read-only) API key.
pub const API_KEY_VAR: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";

/// Connection settings for the row store, read once at startup.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Supabase project base URL, e.g. `https://xyz.supabase.co`
    pub base_url: String,
    /// Anon API key sent as both `apikey` and bearer token
    pub api_key: String,
}

impl AuditConfig {
    /// Read and validate configuration from the process environment.
    ///
    /// Fails before any network activity if either variable is missing or
    /// empty, naming every missing variable in one message so a fresh
    /// setup is fixed in a single pass.
    pub fn from_env() -> Result<Self> {
        match (non_empty_var(BASE_URL_VAR), non_empty_var(API_KEY_VAR)) {
            (Some(base_url), Some(api_key)) => Ok(Self { base_url, api_key }),
            (base_url, api_key) => {
                let mut missing = Vec::new();
                if base_url.is_none() {
                    missing.push(BASE_URL_VAR);
                }
                if api_key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                bail!("Missing env var(s): {}", missing.join(" and "))
            }
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
