// src/core/rules/forms_rule.rs

use crate::core::document::ParsedDocument;
use crate::core::models::{Finding, FindingCategory, ScanContext};
use tracing::debug;

/// Flags forms whose `action` does not submit over HTTPS.
///
/// A plain `http://` action is tolerated when the page itself was served over
/// `http`, since the form then adds no downgrade of its own. Forms with a missing
/// or empty `action` are skipped: they submit back to the page's own URL and are
/// not reported.
pub fn check(document: &ParsedDocument, context: &ScanContext) -> Vec<Finding> {
    let mut findings = Vec::new();

    for form in document.find_all("form") {
        let Some(action) = form.attr("action").filter(|a| !a.is_empty()) else {
            debug!("Form without action, skipping.");
            continue;
        };

        if is_insecure_action(action, &context.scheme) {
            debug!(action, "Insecure form action found.");
            findings.push(Finding::new(
                FindingCategory::Form,
                &format!("Insecure Form action {} found in document", action),
            ));
        }
    }

    findings
}

fn is_insecure_action(action: &str, page_scheme: &str) -> bool {
    let action_lower = action.to_lowercase();
    if action_lower.contains("https://") {
        return false;
    }
    !(page_scheme == "http" && action_lower.contains("http://"))
}
