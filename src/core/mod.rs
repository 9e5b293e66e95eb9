// src/core/mod.rs

/// Data structures shared by the rules and the report: findings, rule names and
/// the scan outcome.
pub mod models;

/// Typed errors for the fetch, config and output boundaries.
pub mod error;

/// URL classification and document retrieval over HTTP(S) or from local files.
pub mod fetcher;

/// Read-only query layer over the parsed HTML tree.
pub mod document;

/// The fixed rule catalog and its evaluation.
pub mod rules;

/// Turns a scan outcome into report text.
pub mod report;

/// Ties fetching, parsing, rule evaluation and reporting together.
pub mod scanner;
