// src/core/scanner/mod.rs

use crate::config::ScanConfig;
use crate::core::document::ParsedDocument;
use crate::core::fetcher::{fetch_document, FetchedDocument};
use crate::core::models::{ScanContext, ScanReport};
use crate::core::rules::evaluate_catalog;
use tracing::{info, warn};

/// Fetches the document behind `url` and evaluates the rule catalog against it.
///
/// A failed fetch is not an error for the caller: it yields an `Invalid` report.
/// The fetch error itself only goes to the log.
pub async fn run_scan(url: &str, config: &ScanConfig) -> ScanReport {
    info!(url, "Starting scan.");

    match fetch_document(url).await {
        Ok(document) => scan_document(&document, config),
        Err(e) => {
            warn!(url, error = %e, "Document could not be retrieved.");
            ScanReport::invalid()
        }
    }
}

/// Evaluates an already retrieved document. Pure: no I/O.
pub fn scan_document(document: &FetchedDocument, config: &ScanConfig) -> ScanReport {
    let parsed = ParsedDocument::from_bytes(&document.markup);
    let context = ScanContext::new(&document.scheme);
    let report = ScanReport::from_findings(evaluate_catalog(&parsed, &context, config));
    info!(status = ?report.status, findings = %report.findings.len(), "Scan finished.");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{FindingCategory, RuleId, ScanStatus};
    use crate::core::fetcher::tests::serve_once;
    use crate::core::report::render;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use url::Url;

    fn fixture_url(name: &str) -> String {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_html").join(name);
        Url::from_file_path(path).unwrap().to_string()
    }

    async fn scan_fixture(name: &str, config: &ScanConfig) -> String {
        render(&run_scan(&fixture_url(name), config).await)
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[tokio::test]
    async fn test_invalid_url_is_invalid_regardless_of_config() {
        for config in [ScanConfig::default(), ScanConfig::from_entries([(RuleId::Forms, false)])] {
            let report = run_scan("invalid-url", &config).await;
            assert_eq!(report.status, ScanStatus::Invalid);
            assert!(render(&report).contains("Invalid URL"));
        }
        let report = run_scan("ftp://example.com/index.html", &ScanConfig::default()).await;
        assert_eq!(report.status, ScanStatus::Invalid);
    }

    #[tokio::test]
    async fn test_missing_local_file_is_invalid() {
        let report = run_scan(&fixture_url("does_not_exist.html"), &ScanConfig::default()).await;
        assert_eq!(report.status, ScanStatus::Invalid);
    }

    #[tokio::test]
    async fn test_form_fixtures() {
        let config = ScanConfig::default();
        let text = scan_fixture("form_relative_action.html", &config).await;
        assert!(text.contains("Form Issue: Insecure Form action submit.php found in document"));

        let text = scan_fixture("form_absolute_action.html", &config).await;
        assert!(text.contains("Form Issue: Insecure Form action /submit.php"));

        let text = scan_fixture("form_external_action.html", &config).await;
        assert!(text.contains("Form Issue: Insecure Form action http://example.com/submit.php"));

        let text = scan_fixture("form_ftp_action.html", &config).await;
        assert!(text.contains("Form Issue: Insecure Form action ftp://example.com/upload"));

        let text = scan_fixture("form_no_action.html", &config).await;
        assert!(!text.contains("Form Issue"));
    }

    #[tokio::test]
    async fn test_comment_fixtures() {
        let config = ScanConfig::default();
        assert_eq!(count(&scan_fixture("comment_variations.html", &config).await, "Comment Issue: Key is found"), 3);
        assert_eq!(count(&scan_fixture("comment_multiple_keys.html", &config).await, "Comment Issue: Key is found"), 2);
        assert!(!scan_fixture("no_comments.html", &config).await.contains("Comment Issue"));
    }

    #[tokio::test]
    async fn test_password_fixtures() {
        let config = ScanConfig::default();
        assert!(scan_fixture("password_text_type.html", &config).await.contains("Input Issue: Plaintext password input was found"));
        assert!(!scan_fixture("password_missing_name.html", &config).await.contains("Input Issue"));
        assert!(!scan_fixture("multiple_password_fields.html", &config).await.contains("Input Issue"));
    }

    #[tokio::test]
    async fn test_malformed_html_still_produces_report() {
        let text = scan_fixture("malformed.html", &ScanConfig::default()).await;
        assert!(text.contains("Nice Job! Your HTML document is Secure."));
    }

    #[tokio::test]
    async fn test_disabling_forms_makes_forms_only_page_secure() {
        let config = ScanConfig::from_yaml("forms: false\ncomments: true\npasswords: true").unwrap();
        let report = run_scan(&fixture_url("form_external_action.html"), &config).await;
        assert_eq!(report.status, ScanStatus::Secure);
        assert!(render(&report).contains("Nice Job! Your HTML document is Secure."));
    }

    #[tokio::test]
    async fn test_disabling_comments_makes_comment_page_secure() {
        let config = ScanConfig::from_yaml("forms: true\ncomments: false\npasswords: true").unwrap();
        let text = scan_fixture("comment_variations.html", &config).await;
        assert!(!text.contains("Comment Issue"));
        assert!(text.contains("Nice Job! Your HTML document is Secure."));
    }

    #[tokio::test]
    async fn test_disabling_passwords_keeps_form_findings() {
        let config = ScanConfig::from_yaml("forms: true\ncomments: true\npasswords: false").unwrap();
        let report = run_scan(&fixture_url("password_text_type.html"), &config).await;
        assert!(report.findings.iter().all(|f| f.category != FindingCategory::Input));
        assert!(render(&report).contains("Form Issue: Insecure Form action submit.php"));
    }

    #[tokio::test]
    async fn test_scan_is_idempotent() {
        let config = ScanConfig::default();
        let first = scan_fixture("comment_variations.html", &config).await;
        let second = scan_fixture("comment_variations.html", &config).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_http_page_with_http_form_action_is_secure() {
        let addr = serve_once("200 OK", r#"<form action="http://example.com/submit.php"></form>"#).await;
        let report = run_scan(&format!("http://{}/login", addr), &ScanConfig::default()).await;
        assert_eq!(report.status, ScanStatus::Secure);
    }

    #[tokio::test]
    async fn test_http_error_page_is_invalid() {
        let addr = serve_once("404 Not Found", "<form action=\"a.php\"></form>").await;
        let report = run_scan(&format!("http://{}/", addr), &ScanConfig::default()).await;
        assert_eq!(report.status, ScanStatus::Invalid);
    }

    #[test]
    fn test_scan_document_uses_fetch_scheme() {
        let markup = br#"<form action="http://example.com/submit.php"></form>"#.to_vec();
        let over_http = FetchedDocument { markup: markup.clone(), scheme: "http".to_string() };
        let over_https = FetchedDocument { markup, scheme: "https".to_string() };
        assert_eq!(scan_document(&over_http, &ScanConfig::default()).status, ScanStatus::Secure);
        assert_eq!(scan_document(&over_https, &ScanConfig::default()).status, ScanStatus::IssuesFound);
    }
}
