use url::Url;

/// Decides whether a URL belongs to the target domain
///
/// Parses the URL's host component and returns true iff the host contains
/// `domain` as a substring. Any parse failure, or a URL without a host
/// (`mailto:`, `javascript:`, relative fragments), yields false — scope
/// rejection is never an error.
///
/// The substring match is intentionally loose: it matches subdomains, but
/// also any host that merely embeds the domain string (e.g.
/// `example.com.evil.test` contains `example.com`). Suitable for crawling a
/// site you chose the seed for, not for security decisions.
///
/// # Examples
///
/// ```
/// use site_sweep::url::in_scope;
///
/// assert!(in_scope("https://example.com/page", "example.com"));
/// assert!(in_scope("https://blog.example.com", "example.com"));
/// assert!(!in_scope("https://external.com/x", "example.com"));
/// assert!(!in_scope("mailto:a@example.com", "example.com"));
/// ```
pub fn in_scope(url: &str, domain: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|host| host.contains(domain))
            .unwrap_or(false),
        Err(_) => false,
    }
}
