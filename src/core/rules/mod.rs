// src/core/rules/mod.rs

// Each rule lives in its own module and exposes a single `check` function.
pub mod autocomplete_rule;
pub mod comments_rule;
pub mod forms_rule;
pub mod iframes_rule;
pub mod inline_script_rule;
pub mod passwords_rule;

use crate::config::ScanConfig;
use crate::core::document::ParsedDocument;
use crate::core::models::{Finding, RuleId, ScanContext};
use tracing::{debug, info};

/// One entry of the rule catalog.
pub struct Rule {
    /// The config key that enables or disables the rule.
    pub id: RuleId,
    /// Used when the config does not mention the rule.
    pub enabled_by_default: bool,
    /// Produces the rule's findings, in document order.
    pub evaluate: fn(&ParsedDocument, &ScanContext) -> Vec<Finding>,
}

/// The fixed, ordered rule catalog. Report order follows this table.
pub static CATALOG: &[Rule] = &[
    Rule { id: RuleId::Forms, enabled_by_default: true, evaluate: forms_rule::check },
    Rule { id: RuleId::Comments, enabled_by_default: true, evaluate: comments_rule::check },
    Rule { id: RuleId::Passwords, enabled_by_default: true, evaluate: passwords_rule::check },
    Rule { id: RuleId::PasswordAutocomplete, enabled_by_default: false, evaluate: autocomplete_rule::check },
    Rule { id: RuleId::InlineJavascript, enabled_by_default: true, evaluate: inline_script_rule::check },
    Rule { id: RuleId::Iframes, enabled_by_default: true, evaluate: iframes_rule::check },
];

/// Runs every enabled rule of the catalog against the document.
///
/// Rules are independent: disabling one never changes what another reports.
/// The result is ordered by catalog position, then by document order.
pub fn evaluate_catalog(document: &ParsedDocument, context: &ScanContext, config: &ScanConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    for rule in CATALOG {
        if !config.is_enabled(rule) {
            debug!(rule = %rule.id, "Rule disabled by configuration, skipping.");
            continue;
        }
        let rule_findings = (rule.evaluate)(document, context);
        debug!(rule = %rule.id, findings = %rule_findings.len(), "Rule evaluated.");
        findings.extend(rule_findings);
    }

    info!(findings = %findings.len(), "Rule catalog evaluated.");
    findings
}
