//! directory-audit: outbound link auditor for the tools directory
//!
//! Loads every tool record from the row store, probes each outbound URL
//! with an HTTP HEAD request, and reports broken links. Read-only: the
//! store is never modified.

pub mod audit;
pub mod config;
pub mod probe;
pub mod report;
pub mod store;

pub use audit::{run_audit, AuditOptions};
pub use config::AuditConfig;
pub use probe::{probe, ProbeResult};
pub use report::{AuditReport, Failure};
pub use store::{fetch_tools, Record};
