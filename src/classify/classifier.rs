//! Origin-aware link classification.

use regex::Regex;
use url::Url;

use crate::classify::patterns::{FEED_PATH_RE, LIST_PATH_RE, POST_PATH_RE};
use crate::classify::trust::{is_possibly_a_url, label_to_domain};
use crate::config::Config;
use crate::error::UnparseableUrl;

/// Classifies URLs relative to the app's canonical web origin.
///
/// The origin, display name, and trusted host suffixes are injected at
/// construction time (see [`Config`]); nothing origin-specific is compiled
/// in, so staging and production deployments differ only in configuration.
///
/// Every method is pure: no I/O, no logging, no shared mutable state. URL
/// parse failures are caught internally and mapped to each operation's
/// documented fallback; [`app_path`](Self::app_path) exposes the tagged
/// [`UnparseableUrl`] outcome for callers that want to handle it.
#[derive(Debug, Clone)]
pub struct LinkClassifier {
    origin: Url,
    /// Origin serialization with its trailing slash, e.g. `https://bsky.app/`.
    /// App URLs are exactly the strings starting with this prefix.
    app_prefix: String,
    display_name: String,
    trusted_suffixes: Vec<String>,
}

impl LinkClassifier {
    /// Builds a classifier from validated configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_origin(
            config.web_origin.clone(),
            &config.display_name,
            &config.trusted_suffixes,
        )
    }

    /// Builds a classifier from explicit parts.
    ///
    /// `origin` must be an origin-only URL (enforced by [`Config::validate`]
    /// when loaded from the environment). Suffixes are compared
    /// case-insensitively against destination hosts.
    pub fn with_origin(origin: Url, display_name: &str, trusted_suffixes: &[String]) -> Self {
        let mut app_prefix = origin.to_string();
        if !app_prefix.ends_with('/') {
            app_prefix.push('/');
        }
        Self {
            origin,
            app_prefix,
            display_name: display_name.to_string(),
            trusted_suffixes: trusted_suffixes
                .iter()
                .map(|s| s.to_ascii_lowercase())
                .collect(),
        }
    }

    /// The canonical web origin this classifier was configured with.
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// True when `url` points inside the app's own web origin.
    ///
    /// A plain string-prefix test against `<origin>/`, matching the shape
    /// links take in posts; the bare origin without a trailing slash is not
    /// an app URL.
    pub fn is_app_url(&self, url: &str) -> bool {
        url.starts_with(&self.app_prefix)
    }

    /// True for http(s) URLs that do not point inside the app origin.
    pub fn is_external_url(&self, url: &str) -> bool {
        !self.is_app_url(url) && url.starts_with("http")
    }

    /// Human-readable host of `url`.
    ///
    /// A URL on the canonical origin is rewritten to the configured display
    /// name. Unparseable input, or a URL with no host, comes back unchanged.
    pub fn to_nice_domain(&self, url: &str) -> String {
        let Ok(parsed) = Url::parse(url) else {
            return url.to_string();
        };
        if parsed.origin() == self.origin.origin() {
            return self.display_name.clone();
        }
        match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => url.to_string(),
        }
    }

    /// Rebases `path_or_url` onto the canonical origin unless it already
    /// starts with `https`. Always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bsky_links::classify::classifier::LinkClassifier;
    /// # use url::Url;
    /// let classifier = LinkClassifier::with_origin(
    ///     Url::parse("https://bsky.app").unwrap(),
    ///     "Bluesky Social",
    ///     &["bsky.app".to_string()],
    /// );
    /// assert_eq!(
    ///     classifier.to_share_url("/profile/alice.test"),
    ///     "https://bsky.app/profile/alice.test"
    /// );
    /// ```
    pub fn to_share_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("https") {
            return path_or_url.to_string();
        }
        let mut share = self.origin.clone();
        share.set_path(path_or_url);
        share.to_string()
    }

    /// True for app URLs whose path names a post record.
    ///
    /// Parse failure yields false; the feed and list predicates behave
    /// identically for their own path shapes.
    pub fn is_post_url(&self, url: &str) -> bool {
        self.path_matches(url, &POST_PATH_RE)
    }

    /// True for app URLs whose path names a custom feed record.
    pub fn is_custom_feed_url(&self, url: &str) -> bool {
        self.path_matches(url, &FEED_PATH_RE)
    }

    /// True for app URLs whose path names a list record.
    pub fn is_list_url(&self, url: &str) -> bool {
        self.path_matches(url, &LIST_PATH_RE)
    }

    fn path_matches(&self, url: &str, pattern: &Regex) -> bool {
        self.is_app_url(url)
            && Url::parse(url).is_ok_and(|parsed| pattern.is_match(parsed.path()))
    }

    /// Path component of `url`.
    ///
    /// The Result-based core of [`app_url_to_path`](Self::app_url_to_path):
    /// callers that want to log or otherwise handle the malformed-URL case
    /// get the tagged outcome here instead of a silent fallback.
    ///
    /// # Errors
    ///
    /// [`UnparseableUrl`] when `url` is not a valid absolute URL.
    pub fn app_path(&self, url: &str) -> Result<String, UnparseableUrl> {
        match Url::parse(url) {
            Ok(parsed) => Ok(parsed.path().to_string()),
            Err(_) => Err(UnparseableUrl::new(url)),
        }
    }

    /// Converts an app URL into its in-app navigation path; any other input
    /// (including an app-prefixed string that fails URL parsing) is returned
    /// unchanged.
    ///
    /// Applying this twice is a no-op: a bare path no longer matches the
    /// app-URL predicate, so the second pass passes it through.
    pub fn app_url_to_path(&self, url: &str) -> String {
        if !self.is_app_url(url) {
            return url.to_string();
        }
        self.app_path(url).unwrap_or_else(|_| url.to_string())
    }

    /// Decides whether following `uri` under the rendered `label` deserves a
    /// deceptive-link warning.
    ///
    /// Hosts are case-insensitive, so comparison happens on lowercased
    /// values. An unparseable destination always warns.
    ///
    /// For destinations on the app's own domains the warning fires only when
    /// the label itself reads as a URL to somewhere else. For external
    /// destinations it fires whenever the label's apparent domain is missing
    /// or differs from the destination host.
    pub fn link_requires_warning(&self, uri: &str, label: &str) -> bool {
        let label_domain = label_to_domain(label);

        let Ok(parsed) = Url::parse(uri) else {
            // Fail safe: an unparseable destination is always suspicious.
            return true;
        };
        let host = parsed.host_str().unwrap_or("").to_ascii_lowercase();

        if self.is_trusted_host(&host) {
            // Internal content: warn only when the label masquerades as a
            // URL pointing somewhere else.
            label_domain.is_some_and(|domain| domain != host && is_possibly_a_url(&domain))
        } else {
            // External content: the label must name the destination host.
            match label_domain {
                Some(domain) => domain != host,
                None => true,
            }
        }
    }

    /// True when `host` equals a trusted suffix or ends with `.<suffix>`.
    fn is_trusted_host(&self, host: &str) -> bool {
        self.trusted_suffixes.iter().any(|suffix| {
            host == suffix
                || host
                    .strip_suffix(suffix.as_str())
                    .is_some_and(|rest| rest.ends_with('.'))
        })
    }
}
