// src/core/report.rs

use crate::core::models::{ScanReport, ScanStatus};

pub const TITLE: &str = "The Aegis HTML Vulnerability Analyser 1.0";
pub const SECURE_LINE: &str = "Nice Job! Your HTML document is Secure.";
pub const ISSUES_LINE: &str = "Your vulnerability Analysis is as follows:";
pub const INVALID_LINE: &str = "Invalid URL. Please include the full URL including HTTPS, or a valid local file path.";

fn underline() -> String {
    "=".repeat(TITLE.len())
}

/// Renders a report to the text shown on the console and written to `--output`.
///
/// The output depends only on the report, so identical scans render byte-identical
/// text. Lines are separated by `\n` with no trailing newline.
pub fn render(report: &ScanReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    match report.status {
        ScanStatus::Invalid => lines.push(INVALID_LINE.to_string()),
        ScanStatus::Secure => {
            lines.push(TITLE.to_string());
            lines.push(underline());
            lines.push(SECURE_LINE.to_string());
        }
        ScanStatus::IssuesFound => {
            lines.push(TITLE.to_string());
            lines.push(underline());
            lines.push(ISSUES_LINE.to_string());
            lines.push(underline());
            lines.extend(report.findings.iter().map(|f| f.message.clone()));
        }
    }

    lines.join("\n")
}
