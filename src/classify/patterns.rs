//! Compiled path and identifier patterns.
//!
//! Deep-link recognition works on the *path* of an already parsed URL, so
//! the patterns here can be exercised against raw path strings without any
//! URL parsing involved. Each deep-link pattern captures `name` (the profile
//! authority segment, a handle or DID) and `rkey` (the record key segment);
//! matching is case-insensitive and unanchored, mirroring how these paths
//! appear inside full profile URLs.

use regex::Regex;
use std::sync::LazyLock;

/// Matches post paths: `profile/<name>/post/<rkey>`.
pub static POST_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)profile/(?P<name>[^/]+)/post/(?P<rkey>[^/]+)").unwrap());

/// Matches custom feed paths: `profile/<name>/feed/<rkey>`.
pub static FEED_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)profile/(?P<name>[^/]+)/feed/(?P<rkey>[^/]+)").unwrap());

/// Matches list paths: `profile/<name>/lists/<rkey>`.
pub static LIST_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)profile/(?P<name>[^/]+)/lists/(?P<rkey>[^/]+)").unwrap());

/// Matches a whole `at://` record URI.
///
/// Captures `authority`, `collection`, and `rkey`; each segment is non-empty
/// and never spans `/`, `?`, `#`, or whitespace. A single trailing slash is
/// tolerated.
pub static RECORD_URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^at://(?P<authority>[^/?#\s]+)/(?P<collection>[^/?#\s]+)/(?P<rkey>[^/?#\s]+)/?$")
        .unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_path_matches() {
        let caps = POST_PATH_RE
            .captures("/profile/alice.test/post/3jzfcijpj2z2a")
            .unwrap();
        assert_eq!(&caps["name"], "alice.test");
        assert_eq!(&caps["rkey"], "3jzfcijpj2z2a");
    }

    #[test]
    fn test_feed_path_matches() {
        let caps = FEED_PATH_RE
            .captures("/profile/did:plc:abc123/feed/whats-hot")
            .unwrap();
        assert_eq!(&caps["name"], "did:plc:abc123");
        assert_eq!(&caps["rkey"], "whats-hot");
    }

    #[test]
    fn test_list_path_matches() {
        let caps = LIST_PATH_RE
            .captures("/profile/alice.test/lists/3kmn2dvpx")
            .unwrap();
        assert_eq!(&caps["name"], "alice.test");
        assert_eq!(&caps["rkey"], "3kmn2dvpx");
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        assert!(POST_PATH_RE.is_match("/PROFILE/Alice.Test/POST/AbC"));
        assert!(FEED_PATH_RE.is_match("/Profile/alice/Feed/xyz"));
        assert!(LIST_PATH_RE.is_match("/profile/alice/LISTS/xyz"));
    }

    #[test]
    fn test_patterns_do_not_cross_match() {
        let path = "/profile/alice.test/post/abc123";
        assert!(POST_PATH_RE.is_match(path));
        assert!(!FEED_PATH_RE.is_match(path));
        assert!(!LIST_PATH_RE.is_match(path));
    }

    #[test]
    fn test_patterns_require_record_key() {
        assert!(!POST_PATH_RE.is_match("/profile/alice.test/post/"));
        assert!(!POST_PATH_RE.is_match("/profile/alice.test/post"));
    }

    #[test]
    fn test_record_uri_full_match() {
        let caps = RECORD_URI_RE
            .captures("at://alice.test/app.bsky.feed.post/3jzfcijpj2z2a")
            .unwrap();
        assert_eq!(&caps["authority"], "alice.test");
        assert_eq!(&caps["collection"], "app.bsky.feed.post");
        assert_eq!(&caps["rkey"], "3jzfcijpj2z2a");
    }

    #[test]
    fn test_record_uri_tolerates_trailing_slash() {
        assert!(RECORD_URI_RE.is_match("at://alice.test/app.bsky.graph.list/abc/"));
    }

    #[test]
    fn test_record_uri_rejects_incomplete() {
        assert!(!RECORD_URI_RE.is_match("at://alice.test/app.bsky.feed.post"));
        assert!(!RECORD_URI_RE.is_match("at://alice.test"));
        assert!(!RECORD_URI_RE.is_match("https://alice.test/a/b"));
        assert!(!RECORD_URI_RE.is_match("at://alice.test/a/b c"));
    }
}
