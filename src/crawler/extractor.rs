//! HTML link extraction
//!
//! Anchors are parsed leniently via html5ever (through `scraper`), so
//! malformed markup never fails; the extractor simply yields what it can.

use crate::url::normalize;
use scraper::{Html, Selector};
use url::Url;

/// Extracts resolved, normalized candidate links from an HTML page
///
/// Finds all anchor elements with an `href` attribute, resolves each href
/// against `base` per standard URL-resolution rules, normalizes the result,
/// and yields the sequence in document order. Hrefs that fail to resolve are
/// skipped individually.
///
/// Scope filtering is not done here; the controller decides what to enqueue.
///
/// # Example
///
/// ```
/// use site_sweep::crawler::extract_links;
/// use url::Url;
///
/// let base = Url::parse("https://example.com").unwrap();
/// let html = r#"<a href="/about">About</a>"#;
/// assert_eq!(extract_links(&base, html), vec!["https://example.com/about"]);
/// ```
pub fn extract_links(base: &Url, html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(|resolved| normalize(resolved.as_str()))
        .collect()
}
