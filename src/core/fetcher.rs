// src/core/fetcher.rs

use crate::core::error::FetchError;
use std::time::Duration;
use tracing::{debug, error, info};
use url::{Host, Url};

/// Upper bound for an HTTP(S) fetch, connection included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw markup and the scheme it was retrieved with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub markup: Vec<u8>,
    pub scheme: String,
}

/// How a URL string is going to be retrieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Remote(Url),
    LocalFile(std::path::PathBuf),
}

/// Decides whether a URL can be fetched, and how.
///
/// `file:` URLs map to a local path (percent-escapes and drive letters are handled
/// by `Url::to_file_path`). `http`/`https` URLs need a host that is a dotted domain,
/// an IP literal or `localhost`. Everything else is an invalid URL.
pub fn classify_url(raw: &str) -> Result<Target, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        debug!(url = raw, error = %e, "URL failed to parse.");
        FetchError::InvalidUrl(raw.to_string())
    })?;

    let scheme = url.scheme().to_string();
    match scheme.as_str() {
        "file" => url
            .to_file_path()
            .map(Target::LocalFile)
            .map_err(|_| FetchError::InvalidUrl(raw.to_string())),
        "http" | "https" if has_valid_host(&url) => Ok(Target::Remote(url)),
        _ => Err(FetchError::InvalidUrl(raw.to_string())),
    }
}

fn has_valid_host(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => {
            domain == "localhost"
                || (domain.contains('.') && domain.split('.').all(|label| !label.is_empty()))
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Retrieves the document behind `raw`, giving remote fetches `FETCH_TIMEOUT`.
pub async fn fetch_document(raw: &str) -> Result<FetchedDocument, FetchError> {
    fetch_document_with_timeout(raw, FETCH_TIMEOUT).await
}

pub async fn fetch_document_with_timeout(raw: &str, timeout: Duration) -> Result<FetchedDocument, FetchError> {
    match classify_url(raw)? {
        Target::LocalFile(path) => {
            info!(path = %path.display(), "Reading local document.");
            let markup = tokio::fs::read(&path).await.map_err(|source| {
                error!(path = %path.display(), error = %source, "Failed to read local document.");
                FetchError::NotFound { path, source }
            })?;
            debug!(bytes = %markup.len(), "Local document read.");
            Ok(FetchedDocument { markup, scheme: "file".to_string() })
        }
        Target::Remote(url) => fetch_remote(url, timeout).await,
    }
}

async fn fetch_remote(url: Url, timeout: Duration) -> Result<FetchedDocument, FetchError> {
    info!(url = %url, timeout_ms = %timeout.as_millis(), "Fetching remote document.");

    let client = reqwest::Client::builder()
        .user_agent(concat!("Aegis/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to build HTTP client");
            FetchError::Unreachable { url: url.to_string(), reason: e.to_string() }
        })?;

    let scheme = url.scheme().to_string();
    let response = client.get(url.clone()).send().await.map_err(|e| request_error(&url, e))?;

    let status = response.status();
    info!(status = %status, "Received HTTP response.");
    if !status.is_success() {
        return Err(FetchError::Unreachable { url: url.to_string(), reason: format!("HTTP status {}", status) });
    }

    let markup = response.bytes().await.map_err(|e| request_error(&url, e))?;
    debug!(bytes = %markup.len(), "Successfully read response body.");
    Ok(FetchedDocument { markup: markup.to_vec(), scheme })
}

fn request_error(url: &Url, e: reqwest::Error) -> FetchError {
    error!(url = %url, error = %e, "HTTP request failed");
    if e.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::Unreachable { url: url.to_string(), reason: e.to_string() }
    }
}
