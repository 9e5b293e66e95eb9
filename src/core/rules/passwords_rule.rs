// src/core/rules/passwords_rule.rs

use crate::core::document::ParsedDocument;
use crate::core::models::{Finding, FindingCategory, ScanContext};
use tracing::debug;

/// Flags `<input name="password">` fields that are not `type="password"`.
///
/// Only inputs literally named `password` are inspected. A field that behaves like
/// a password but carries another name is out of scope for this rule.
pub fn check(document: &ParsedDocument, _context: &ScanContext) -> Vec<Finding> {
    document
        .find_all_with_attr("input", "name", "password")
        .into_iter()
        .filter(|input| input.attr("type") != Some("password"))
        .map(|input| {
            debug!(tag = input.tag_name(), input_type = ?input.attr("type"), "Plaintext password input found.");
            Finding::new(
                FindingCategory::Input,
                "Plaintext password input was found. Please change to password type input",
            )
        })
        .collect()
}
