//! Label inspection for the deceptive-link policy.
//!
//! Hosts are case-insensitive, so everything here reports lowercase values
//! for comparison.
//!
//! See <https://www.rfc-editor.org/rfc/rfc3986#section-3.2.2>.

use url::Url;

use crate::domain::apex::is_valid_domain;

/// Apparent domain of a rendered link label, lowercased.
///
/// A label containing whitespace is never a URL. Otherwise the label is
/// parsed as-is and, only when that parse fails outright, once more with
/// `https://` prepended. A label that parses but has no host (e.g. a
/// scheme-only string like `mailto:...`) yields `None` without a retry.
pub fn label_to_domain(label: &str) -> Option<String> {
    if label.chars().any(char::is_whitespace) {
        return None;
    }
    match Url::parse(label) {
        Ok(parsed) => parsed.host_str().map(str::to_ascii_lowercase),
        Err(_) => Url::parse(&format!("https://{label}"))
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_ascii_lowercase)),
    }
}

/// Heuristic: does this string read as a URL?
///
/// True for explicit `http://` / `https://` prefixes, and for strings whose
/// first whitespace-or-slash-delimited token is a valid domain per
/// [`is_valid_domain`].
pub fn is_possibly_a_url(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with("http://") || s.starts_with("https://") {
        return true;
    }
    let first_token = s
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default();
    is_valid_domain(first_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_to_domain_bare_domain() {
        assert_eq!(label_to_domain("bsky.app"), Some("bsky.app".to_string()));
    }

    #[test]
    fn test_label_to_domain_full_url_is_lowercased() {
        assert_eq!(
            label_to_domain("https://Example.COM/path"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_label_to_domain_rejects_whitespace() {
        assert_eq!(label_to_domain("two words.com"), None);
        assert_eq!(label_to_domain("check this out"), None);
    }

    #[test]
    fn test_label_to_domain_unparseable() {
        assert_eq!(label_to_domain("###"), None);
    }

    #[test]
    fn test_label_to_domain_scheme_without_host() {
        // Parses on the first attempt with no host; the https:// retry is
        // not taken.
        assert_eq!(label_to_domain("mailto:alice@example.com"), None);
    }

    #[test]
    fn test_is_possibly_a_url_explicit_scheme() {
        assert!(is_possibly_a_url("http://anything"));
        assert!(is_possibly_a_url("https://anything"));
        assert!(is_possibly_a_url("  https://padded.example  "));
    }

    #[test]
    fn test_is_possibly_a_url_leading_domain_token() {
        assert!(is_possibly_a_url("bsky.app/profile/alice.test"));
        assert!(is_possibly_a_url("example.com check this out"));
    }

    #[test]
    fn test_is_possibly_a_url_plain_text() {
        assert!(!is_possibly_a_url("hello there"));
        assert!(!is_possibly_a_url("notadomain"));
        assert!(!is_possibly_a_url(""));
    }
}
