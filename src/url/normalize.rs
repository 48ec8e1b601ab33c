/// Canonicalizes a URL string according to Site-Sweep's normalization rules
///
/// # Normalization Steps
///
/// 1. Remove everything from the first `#` onward (fragment)
/// 2. Remove everything from the first `?` onward (query string)
/// 3. Strip a single trailing `/`
///
/// Two URLs that differ only in those parts are considered identical. No
/// further normalization (case, default ports, `www.` prefix) is performed.
///
/// This is a pure, total function: it never performs I/O and never fails.
/// Malformed input just normalizes to itself.
///
/// # Examples
///
/// ```
/// use site_sweep::url::normalize;
///
/// assert_eq!(normalize("https://x.com/a?q=1#frag"), "https://x.com/a");
/// assert_eq!(normalize("https://x.com/a/"), "https://x.com/a");
/// assert_eq!(normalize("not a url"), "not a url");
/// ```
pub fn normalize(raw: &str) -> String {
    let without_fragment = raw.split('#').next().unwrap_or("");
    let without_query = without_fragment.split('?').next().unwrap_or("");
    without_query
        .strip_suffix('/')
        .unwrap_or(without_query)
        .to_string()
}
