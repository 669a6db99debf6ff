use url::Url;

/// Rewrites a raw href into an absolute, crawlable URL relative to the
/// page it was found on.
///
/// # Join Policy
///
/// 1. Reject (return `None`, link dropped) if the href is empty or starts
///    with `javascript` (pseudo-links that trigger script, not navigation)
/// 2. Href starting with `/`: concatenate the base URL and the href
///    directly
/// 3. Href not starting with `http`: concatenate base URL, `/`, href
/// 4. Anything else is already absolute and passes through unchanged
///
/// This is a byte-level concatenation policy, not RFC 3986 resolution: no
/// scheme or host is extracted, and a base URL that already carries a path
/// keeps it. A root-relative href such as `/img.png` found on
/// `http://site.example/dir` therefore joins to
/// `http://site.example/dirimg.png`, not `http://site.example/img.png`.
/// The branching is a compatibility contract and must not be "fixed" to
/// path-aware joining without recomputing every downstream expectation.
///
/// # Examples
///
/// ```
/// use imagetrawl::url::normalize;
///
/// let joined = normalize("http://site.example/dir", "gallery/pic.png");
/// assert_eq!(joined.as_deref(), Some("http://site.example/dir/gallery/pic.png"));
/// assert_eq!(normalize("http://site.example", "javascript:void(0)"), None);
/// ```
pub fn normalize(base_url: &str, href: &str) -> Option<String> {
    if href.is_empty() || href.starts_with("javascript") {
        return None;
    }

    if href.starts_with('/') {
        Some(format!("{}{}", base_url, href))
    } else if !href.starts_with("http") {
        Some(format!("{}/{}", base_url, href))
    } else {
        Some(href.to_string())
    }
}

/// Checks whether a URL string parses as an absolute http(s) URL.
///
/// Used as a preflight diagnostic on the start URL: a start URL that fails
/// this check is still crawled (the fetch failure is soft, like any other),
/// but the operator gets a warning up front instead of a silent empty run.
pub fn is_absolute_http(url_str: &str) -> bool {
    match Url::parse(url_str) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}
