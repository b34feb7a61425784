//! Audit accumulator and line-oriented output
//!
//! Failure lines are printed as they happen so a long run gives feedback
//! early; the summary is printed exactly once at the end, interrupted or
//! not. Red coloring is applied only when stdout is a terminal.

use crate::probe::ProbeResult;
use crate::store::Record;
use serde::Serialize;
use std::io::IsTerminal;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// One broken link, kept for the `--json` report.
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub name: String,
    pub id: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Running totals for one audit pass. Single owner: only the sequential
/// driver touches it.
#[derive(Debug, Default, Serialize)]
pub struct AuditReport {
    pub checked: usize,
    pub failed: usize,
    pub failures: Vec<Failure>,
}

impl AuditReport {
    /// Record one classified probe. Returns the failure entry when the
    /// probe failed, so the caller can print it immediately.
    pub fn record(&mut self, record: &Record, url: &str, result: ProbeResult) -> Option<&Failure> {
        self.checked += 1;
        if result.ok {
            return None;
        }
        self.failed += 1;
        self.failures.push(Failure {
            name: record.name.clone(),
            id: record.id.clone(),
            url: url.to_string(),
            status: result.status,
        });
        self.failures.last()
    }
}

/// `Bad link [<status-or-ERR>]: <name> (id=<id>) -> <url>`
pub fn format_failure(failure: &Failure, color: bool) -> String {
    let status = failure
        .status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "ERR".to_string());
    let line = format!(
        "Bad link [{}]: {} (id={}) -> {}",
        status, failure.name, failure.id, failure.url
    );
    if color {
        format!("{}{}{}", RED, line, RESET)
    } else {
        line
    }
}

/// `Checked <N> link(s). <M> failed.` — the failed count goes red when
/// anything failed.
pub fn format_summary(report: &AuditReport, color: bool) -> String {
    if color && report.failed > 0 {
        format!(
            "Checked {} link(s). {}{} failed{}.",
            report.checked, RED, report.failed, RESET
        )
    } else {
        format!("Checked {} link(s). {} failed.", report.checked, report.failed)
    }
}

/// Color only when writing straight to a terminal; piped output stays plain.
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            id: "b2".to_string(),
            name: "DecorMind".to_string(),
            website_url: Some("https://example.com/404".to_string()),
            affiliate_url: None,
        }
    }

    #[test]
    fn test_record_accumulates_counts() {
        let mut report = AuditReport::default();
        let rec = sample_record();

        let ok = ProbeResult {
            ok: true,
            status: Some(200),
        };
        let bad = ProbeResult {
            ok: false,
            status: Some(404),
        };

        assert!(report.record(&rec, "https://good.example", ok).is_none());
        assert!(report
            .record(&rec, "https://example.com/404", bad)
            .is_some());

        assert_eq!(report.checked, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].url, "https://example.com/404");
    }

    #[test]
    fn test_failure_line_with_status() {
        let failure = Failure {
            name: "DecorMind".to_string(),
            id: "b2".to_string(),
            url: "https://example.com/404".to_string(),
            status: Some(404),
        };
        assert_eq!(
            format_failure(&failure, false),
            "Bad link [404]: DecorMind (id=b2) -> https://example.com/404"
        );
    }

    #[test]
    fn test_failure_line_without_status_uses_err_marker() {
        let failure = Failure {
            name: "DecorMind".to_string(),
            id: "b2".to_string(),
            url: "https://dead.example".to_string(),
            status: None,
        };
        assert_eq!(
            format_failure(&failure, false),
            "Bad link [ERR]: DecorMind (id=b2) -> https://dead.example"
        );
    }

    #[test]
    fn test_failure_line_colored() {
        let failure = Failure {
            name: "X".to_string(),
            id: "1".to_string(),
            url: "https://x.example".to_string(),
            status: Some(404),
        };
        let line = format_failure(&failure, true);
        assert!(line.starts_with(RED));
        assert!(line.ends_with(RESET));
    }

    #[test]
    fn test_summary_plain() {
        let report = AuditReport {
            checked: 2,
            failed: 1,
            failures: vec![],
        };
        assert_eq!(format_summary(&report, false), "Checked 2 link(s). 1 failed.");
    }

    #[test]
    fn test_summary_zero_failures_never_colored() {
        let report = AuditReport::default();
        assert_eq!(format_summary(&report, true), "Checked 0 link(s). 0 failed.");
    }

    #[test]
    fn test_summary_colors_failed_count() {
        let report = AuditReport {
            checked: 3,
            failed: 2,
            failures: vec![],
        };
        assert_eq!(
            format_summary(&report, true),
            format!("Checked 3 link(s). {}2 failed{}.", RED, RESET)
        );
    }

    #[test]
    fn test_report_serializes_compact() {
        let mut report = AuditReport::default();
        let rec = sample_record();
        report.record(
            &rec,
            "https://example.com/404",
            ProbeResult {
                ok: false,
                status: Some(404),
            },
        );
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"checked\":1"));
        assert!(json.contains("\"status\":404"));
    }
}
