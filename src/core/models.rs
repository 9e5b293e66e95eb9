// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// --- Catalog Identifiers ---

// The name of every rule in the catalog, as it appears in the YAML config.
// `password_inputs` is the legacy spelling of `passwords` and parses to the same rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleId {
    Forms,
    Comments,
    #[strum(to_string = "passwords", serialize = "password_inputs")]
    Passwords,
    PasswordAutocomplete,
    InlineJavascript,
    Iframes,
}

// --- Findings ---

// The category a finding belongs to. Its display form is the prefix of the report line,
// so `Script` renders as "Inline JavaScript Issue: ...".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum FindingCategory {
    Form,
    Comment,
    Input,
    #[strum(to_string = "Inline JavaScript")]
    Script,
    Iframe,
}

// A single issue reported by one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: FindingCategory,
    pub message: String,
}

impl Finding {
    // Builds the finding and its report line from the category label and the detail text.
    pub fn new(category: FindingCategory, detail: &str) -> Self {
        Self {
            category,
            message: format!("{} Issue: {}", category, detail),
        }
    }
}

// --- Per-scan Context ---

// Facts about the scanned document that rules may consult besides the tree itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanContext {
    // Lowercase scheme the document was retrieved with ("http", "https" or "file").
    pub scheme: String,
}

impl ScanContext {
    pub fn new(scheme: &str) -> Self {
        Self { scheme: scheme.to_ascii_lowercase() }
    }
}

// --- Main Report ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    Secure,
    Invalid,
    IssuesFound,
}

// The outcome of one scan: the findings of every enabled rule in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub status: ScanStatus,
    pub findings: Vec<Finding>,
}

impl ScanReport {
    pub fn invalid() -> Self {
        Self { status: ScanStatus::Invalid, findings: Vec::new() }
    }

    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let status = if findings.is_empty() { ScanStatus::Secure } else { ScanStatus::IssuesFound };
        Self { status, findings }
    }
}
