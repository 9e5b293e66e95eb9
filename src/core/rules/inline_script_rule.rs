// src/core/rules/inline_script_rule.rs

use crate::core::document::ParsedDocument;
use crate::core::models::{Finding, FindingCategory, ScanContext};

/// Flags every `<script>` block without a `src` attribute.
///
/// Only the absence of `src` counts; `src=""` is treated as an external reference.
pub fn check(document: &ParsedDocument, _context: &ScanContext) -> Vec<Finding> {
    document
        .find_all("script")
        .into_iter()
        .filter(|script| script.attr("src").is_none())
        .map(|_| Finding::new(FindingCategory::Script, "Inline JavaScript found. Consider moving to an external file."))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(markup: &str) -> Vec<Finding> {
        check(&ParsedDocument::parse(markup), &ScanContext::new("https"))
    }

    #[test]
    fn test_each_inline_script_is_reported() {
        let findings = scan("<head><script>var a = 1;</script></head><body><script></script></body>");
        assert_eq!(findings.len(), 2);
        assert_eq!(
            findings[0].message,
            "Inline JavaScript Issue: Inline JavaScript found. Consider moving to an external file."
        );
    }

    #[test]
    fn test_external_scripts_are_ignored() {
        assert!(scan(r#"<script src="/app.js"></script><script SRC="https://cdn.example.com/x.js"></script>"#).is_empty());
    }

    #[test]
    fn test_empty_src_is_not_absent() {
        assert!(scan(r#"<script src=""></script>"#).is_empty());
    }
}
