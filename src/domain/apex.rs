//! Hostname splitting against the public suffix list.
//!
//! Separating the registrable (apex) domain from its subdomain prefix needs
//! the public suffix list, since registry boundaries are not guessable from
//! dots alone (`bar.com` vs `bbc.co.uk`). The `addr` crate carries that
//! data; its suffix database also subsumes the IANA TLD list used for
//! [`is_valid_domain`].

/// A hostname split into its subdomain prefix and registrable domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApexDomain {
    /// Everything before the registrable domain, including the trailing dot;
    /// empty when the hostname has no subdomain or its suffix is not listed.
    pub subdomain: String,
    /// The registrable domain, or the whole hostname verbatim when the
    /// public-suffix lookup fails.
    pub domain: String,
}

/// Splits a hostname into `(subdomain-with-trailing-dot, registrable-domain)`.
///
/// The suffix lookup is case-insensitive; the returned parts preserve the
/// caller's casing, so `subdomain + domain` reconstructs the input whenever
/// the hostname is listed.
///
/// Hostnames that are unlisted, unparseable, or have no label before the
/// suffix come back whole: `("", hostname)`.
///
/// # Examples
///
/// ```
/// use bsky_links::domain::apex::split_apex_domain;
///
/// let apex = split_apex_domain("foo.bar.com");
/// assert_eq!(apex.subdomain, "foo.");
/// assert_eq!(apex.domain, "bar.com");
/// ```
pub fn split_apex_domain(hostname: &str) -> ApexDomain {
    // to_ascii_lowercase never changes byte length, so offsets computed on
    // the lowered copy line up with the original string.
    let lower = hostname.to_ascii_lowercase();
    if let Ok(name) = addr::parse_domain_name(&lower)
        && name.has_known_suffix()
        && let Some(root) = name.root()
        && lower.ends_with(root)
    {
        let split = hostname.len() - root.len();
        return ApexDomain {
            subdomain: hostname[..split].to_string(),
            domain: hostname[split..].to_string(),
        };
    }

    ApexDomain {
        subdomain: String::new(),
        domain: hostname.to_string(),
    }
}

/// Reports whether `s` looks like a registrable domain name.
///
/// True only when the string parses as a domain whose suffix is on the
/// public suffix list *and* at least one label precedes the suffix:
/// `bar.com` and `foo.bar.com` qualify, while `notadomain` (unknown suffix)
/// and a bare `com` (nothing before the suffix) do not.
pub fn is_valid_domain(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    match addr::parse_domain_name(&lower) {
        Ok(name) => name.has_known_suffix() && name.root().is_some(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_listed_hostname() {
        let apex = split_apex_domain("foo.bar.com");
        assert_eq!(apex.subdomain, "foo.");
        assert_eq!(apex.domain, "bar.com");
    }

    #[test]
    fn test_split_reconstructs_original() {
        for hostname in ["foo.bar.com", "a.b.bar.com", "bar.com", "router.localnet"] {
            let apex = split_apex_domain(hostname);
            assert_eq!(format!("{}{}", apex.subdomain, apex.domain), hostname);
        }
    }

    #[test]
    fn test_split_without_subdomain() {
        let apex = split_apex_domain("bar.com");
        assert_eq!(apex.subdomain, "");
        assert_eq!(apex.domain, "bar.com");
    }

    #[test]
    fn test_split_multi_label_subdomain() {
        let apex = split_apex_domain("a.b.bar.com");
        assert_eq!(apex.subdomain, "a.b.");
        assert_eq!(apex.domain, "bar.com");
    }

    #[test]
    fn test_split_multi_label_suffix() {
        let apex = split_apex_domain("news.bbc.co.uk");
        assert_eq!(apex.subdomain, "news.");
        assert_eq!(apex.domain, "bbc.co.uk");
    }

    #[test]
    fn test_split_unlisted_suffix_returns_hostname_verbatim() {
        let apex = split_apex_domain("router.localnet");
        assert_eq!(apex.subdomain, "");
        assert_eq!(apex.domain, "router.localnet");
    }

    #[test]
    fn test_split_bare_suffix_returns_hostname_verbatim() {
        let apex = split_apex_domain("com");
        assert_eq!(apex.subdomain, "");
        assert_eq!(apex.domain, "com");
    }

    #[test]
    fn test_split_preserves_caller_casing() {
        let apex = split_apex_domain("Foo.BAR.com");
        assert_eq!(apex.subdomain, "Foo.");
        assert_eq!(apex.domain, "BAR.com");
    }

    #[test]
    fn test_is_valid_domain_accepts_listed_suffixes() {
        assert!(is_valid_domain("bsky.app"));
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("foo.bar.com"));
        assert!(is_valid_domain("bbc.co.uk"));
    }

    #[test]
    fn test_is_valid_domain_is_case_insensitive() {
        assert!(is_valid_domain("EXAMPLE.COM"));
        assert!(is_valid_domain("Bsky.App"));
    }

    #[test]
    fn test_is_valid_domain_rejects_unknown_and_bare_suffixes() {
        assert!(!is_valid_domain("notadomain"));
        assert!(!is_valid_domain("foo.invalidtldxyz"));
        assert!(!is_valid_domain("com"));
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("has space.com"));
    }
}
