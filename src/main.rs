//! audit-links CLI
//!
//! Maintenance job for the tools directory: probes every listed outbound
//! URL and reports broken links. Run with the same Supabase env vars the
//! site build uses:
//!
//!   NEXT_PUBLIC_SUPABASE_URL=... NEXT_PUBLIC_SUPABASE_ANON_KEY=... audit-links

use anyhow::Result;
use clap::Parser;
use directory_audit::{run_audit, AuditConfig, AuditOptions};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "audit-links")]
#[command(version)]
#[command(about = "Check the directory's outbound links for 404s and dead hosts")]
struct Cli {
    /// Delay between probes in milliseconds
    #[arg(long, default_value = "500")]
    delay_ms: u64,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    /// Emit the report as compact JSON instead of per-failure lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config problems must fail before any network activity.
    let config = AuditConfig::from_env()?;

    let opts = AuditOptions {
        delay: Duration::from_millis(cli.delay_ms),
        timeout: Duration::from_millis(cli.timeout_ms),
        json: cli.json,
    };

    run_audit(&config, &opts).await?;
    Ok(())
}
