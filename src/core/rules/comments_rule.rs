// src/core/rules/comments_rule.rs

use crate::core::document::ParsedDocument;
use crate::core::models::{Finding, FindingCategory, ScanContext};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

const KEY_MARKER: &str = "key:";

/// Flags comments that look like they carry a key (`key:`, `Key :`, `KEY:` ...).
///
/// Matching ignores case and all whitespace. A comment is reported once no matter
/// how many keys it contains.
pub fn check(document: &ParsedDocument, _context: &ScanContext) -> Vec<Finding> {
    document
        .comment_nodes()
        .iter()
        .filter(|comment| contains_key(comment))
        .map(|_| {
            debug!("Key found in HTML comment.");
            Finding::new(FindingCategory::Comment, "Key is found in the HTML comment. PLEASE REMOVE")
        })
        .collect()
}

fn contains_key(comment: &str) -> bool {
    RE_WHITESPACE.replace_all(&comment.to_lowercase(), "").contains(KEY_MARKER)
}
