// src/core/document.rs

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

/// A parsed HTML document that the rules query.
///
/// Parsing is best-effort: html5ever repairs malformed markup the way a browser
/// would, so construction never fails.
pub struct ParsedDocument {
    html: Html,
}

/// A read-only view of one element in a `ParsedDocument`.
#[derive(Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl<'a> Element<'a> {
    pub fn tag_name(&self) -> &'a str {
        self.inner.value().name()
    }

    /// Looks up an attribute. Names are matched case-insensitively; the value is
    /// returned exactly as written. `None` means the attribute is absent, which is
    /// not the same as `Some("")`.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(&name.to_ascii_lowercase())
    }
}

impl ParsedDocument {
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            debug!(errors = %html.errors.len(), "Markup parsed with recoverable errors.");
        }
        Self { html }
    }

    /// Decodes raw bytes (lossily, as UTF-8) and parses them.
    pub fn from_bytes(markup: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(markup))
    }

    /// All elements with the given tag name, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<Element<'_>> {
        match Selector::parse(tag) {
            Ok(selector) => self.html.select(&selector).map(|inner| Element { inner }).collect(),
            Err(e) => {
                warn!(tag, error = %e, "Could not build selector for tag.");
                Vec::new()
            }
        }
    }

    /// Elements with the given tag name whose attribute `attr` is exactly `value`.
    pub fn find_all_with_attr(&self, tag: &str, attr: &str, value: &str) -> Vec<Element<'_>> {
        self.find_all(tag)
            .into_iter()
            .filter(|el| el.attr(attr) == Some(value))
            .collect()
    }

    /// The text of every comment node, in document order.
    pub fn comment_nodes(&self) -> Vec<String> {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| node.value().as_comment())
            .map(|comment| {
                let text: &str = comment;
                text.to_string()
            })
            .collect()
    }
}
