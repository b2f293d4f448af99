//! URL path and query helpers.
//!
//! Hrefs are resolved against the page origin, the same way the browser's
//! `new URL(href, location.origin)` does.

use url::Url;

/// Strip trailing slashes; an empty result becomes `/`.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Resolve an `href` attribute value against `base`.
///
/// Returns `None` for values the URL parser rejects; callers treat those
/// elements as non-matches.
pub fn resolve_href(href: &str, base: &Url) -> Option<Url> {
    base.join(href).ok()
}

/// Base for resolving hrefs: the page origin, or the full page URL when the
/// origin is opaque (`"null"` on `file://` pages).
pub fn page_base(origin: &str, page_href: &str) -> Option<Url> {
    Url::parse(origin).or_else(|_| Url::parse(page_href)).ok()
}

/// First value of `name` in a `location.search` style query string.
/// A leading `?` is optional.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// First value of `name` in the query of an already resolved URL.
pub fn url_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
