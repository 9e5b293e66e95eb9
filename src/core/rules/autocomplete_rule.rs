// src/core/rules/autocomplete_rule.rs

use crate::core::document::ParsedDocument;
use crate::core::models::{Finding, FindingCategory, ScanContext};
use tracing::debug;

/// Flags `<input name="password">` fields that leave autocomplete on.
///
/// Anything but an explicit `autocomplete="off"` is reported, including a missing
/// attribute. This rule is off unless enabled in the config.
pub fn check(document: &ParsedDocument, _context: &ScanContext) -> Vec<Finding> {
    document
        .find_all_with_attr("input", "name", "password")
        .into_iter()
        .filter(|input| input.attr("autocomplete") != Some("off"))
        .map(|input| {
            debug!(autocomplete = ?input.attr("autocomplete"), "Password input allows autocomplete.");
            Finding::new(FindingCategory::Input, "Password input field does not have autocomplete=\"off\".")
        })
        .collect()
}
