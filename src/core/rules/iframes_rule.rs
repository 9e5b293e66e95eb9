// src/core/rules/iframes_rule.rs

use crate::core::document::ParsedDocument;
use crate::core::models::{Finding, FindingCategory, ScanContext};
use tracing::debug;

/// Reports the presence of iframes with a single finding, however many there are.
pub fn check(document: &ParsedDocument, _context: &ScanContext) -> Vec<Finding> {
    let count = document.find_all("iframe").len();
    if count == 0 {
        return Vec::new();
    }
    debug!(count, "Iframes found.");
    vec![Finding::new(
        FindingCategory::Iframe,
        "Found <iframe> tags. These can be a security risk if not used carefully.",
    )]
}
