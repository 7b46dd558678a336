//! Origin-independent display helpers.

use url::Url;

/// Longest path+query+fragment tail shown without truncation.
const SHORT_URL_MAX_TAIL: usize = 15;

/// Characters of the tail kept when truncating.
const SHORT_URL_KEPT: usize = 13;

/// Compact display form of a URL: host plus a truncated remainder.
///
/// The remainder is path + query + fragment, with a bare `/` path rendered
/// as nothing at all. Remainders longer than 15 characters are cut to 13
/// with an ellipsis appended. Truncation counts characters, never splitting
/// a multi-byte code point.
///
/// Non-http(s) schemes and unparseable input are returned unchanged.
///
/// # Examples
///
/// ```
/// use bsky_links::classify::display::to_short_url;
///
/// assert_eq!(to_short_url("https://bsky.app"), "bsky.app");
/// assert_eq!(
///     to_short_url("https://example.com/this/is/a/rather/long/path"),
///     "example.com/this/is/a/ra..."
/// );
/// ```
pub fn to_short_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return url.to_string();
    }
    let host = match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => return url.to_string(),
    };

    let mut tail = String::new();
    if parsed.path() != "/" {
        tail.push_str(parsed.path());
    }
    if let Some(query) = parsed.query() {
        tail.push('?');
        tail.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        tail.push('#');
        tail.push_str(fragment);
    }

    if tail.chars().count() > SHORT_URL_MAX_TAIL {
        let kept: String = tail.chars().take(SHORT_URL_KEPT).collect();
        return format!("{host}{kept}...");
    }
    format!("{host}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_drops_bare_root_path() {
        assert_eq!(to_short_url("https://bsky.app"), "bsky.app");
        assert_eq!(to_short_url("https://bsky.app/"), "bsky.app");
    }

    #[test]
    fn test_short_url_keeps_short_tail() {
        assert_eq!(
            to_short_url("https://example.com/a/b/c/d/e"),
            "example.com/a/b/c/d/e"
        );
    }

    #[test]
    fn test_short_url_truncates_long_tail() {
        // "/this/is/a/rather/long/path" is 27 characters; only the first 13
        // survive.
        assert_eq!(
            to_short_url("https://example.com/this/is/a/rather/long/path"),
            "example.com/this/is/a/ra..."
        );
    }

    #[test]
    fn test_short_url_tail_boundary() {
        // Exactly 15 characters of tail (slash included) pass through.
        assert_eq!(
            to_short_url("https://example.com/12345678901234"),
            "example.com/12345678901234"
        );
        // One more and the ellipsis kicks in.
        assert_eq!(
            to_short_url("https://example.com/123456789012345"),
            "example.com/123456789012..."
        );
    }

    #[test]
    fn test_short_url_includes_query_and_fragment() {
        assert_eq!(
            to_short_url("https://example.com/p?q=1#frag"),
            "example.com/p?q=1#frag"
        );
        // A bare root path contributes nothing, so the tail starts at `?`.
        assert_eq!(
            to_short_url("https://example.com/?q=12345678901234567890"),
            "example.com?q=1234567890..."
        );
    }

    #[test]
    fn test_short_url_keeps_explicit_port() {
        assert_eq!(
            to_short_url("https://example.com:8443/x"),
            "example.com:8443/x"
        );
    }

    #[test]
    fn test_short_url_passes_through_non_http_schemes() {
        assert_eq!(
            to_short_url("at://alice.test/app.bsky.feed.post/abc"),
            "at://alice.test/app.bsky.feed.post/abc"
        );
        assert_eq!(
            to_short_url("mailto:alice@example.com"),
            "mailto:alice@example.com"
        );
    }

    #[test]
    fn test_short_url_passes_through_unparseable_input() {
        assert_eq!(to_short_url("not a url"), "not a url");
        assert_eq!(to_short_url(""), "");
    }
}
