//! The `at://` record-identifier scheme.
//!
//! A record URI names a single record in the app's own namespace:
//! `at://{authority}/{collection}/{rkey}`, where the authority is a handle
//! or DID, the collection is a namespace string, and the record key
//! addresses one record within that collection.

use std::fmt;
use std::str::FromStr;

use crate::classify::patterns::RECORD_URI_RE;
use crate::error::RecordUriError;

/// A parsed `at://` record identifier.
///
/// All three components are guaranteed non-empty and free of `/`, `?`, `#`,
/// and whitespace; no further character-set validation is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUri {
    /// Handle or DID owning the record.
    pub authority: String,
    /// Collection namespace, e.g. `app.bsky.feed.post`.
    pub collection: String,
    /// Record key within the collection.
    pub rkey: String,
}

impl RecordUri {
    /// Builds a record URI from its components.
    ///
    /// # Errors
    ///
    /// Returns [`RecordUriError`] when a component is empty or contains a
    /// character that would break the URI syntax.
    pub fn new(
        authority: impl Into<String>,
        collection: impl Into<String>,
        rkey: impl Into<String>,
    ) -> Result<Self, RecordUriError> {
        let authority = authority.into();
        let collection = collection.into();
        let rkey = rkey.into();

        if authority.is_empty() {
            return Err(RecordUriError::EmptyAuthority);
        }
        if collection.is_empty() {
            return Err(RecordUriError::EmptyCollection);
        }
        if rkey.is_empty() {
            return Err(RecordUriError::EmptyRecordKey);
        }

        for component in [&authority, &collection, &rkey] {
            let broken = component
                .chars()
                .any(|c| c == '/' || c == '?' || c == '#' || c.is_whitespace());
            if broken {
                return Err(RecordUriError::InvalidComponent {
                    component: component.clone(),
                });
            }
        }

        Ok(Self {
            authority,
            collection,
            rkey,
        })
    }
}

impl fmt::Display for RecordUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at://{}/{}/{}", self.authority, self.collection, self.rkey)
    }
}

impl FromStr for RecordUri {
    type Err = RecordUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RECORD_URI_RE
            .captures(s)
            .ok_or_else(|| RecordUriError::InvalidSyntax {
                input: s.to_string(),
            })?;
        Self::new(&caps["authority"], &caps["collection"], &caps["rkey"])
    }
}

/// Serializes the three identifier components as an `at://` URI.
///
/// # Errors
///
/// Propagates [`RecordUriError`] for empty or malformed components; callers
/// are expected to pre-validate their input.
///
/// # Examples
///
/// ```
/// use bsky_links::domain::record_uri::make_record_uri;
///
/// let uri = make_record_uri("alice.test", "app.bsky.feed.post", "3jzfcijpj2z2a").unwrap();
/// assert_eq!(uri, "at://alice.test/app.bsky.feed.post/3jzfcijpj2z2a");
/// ```
pub fn make_record_uri(
    authority: &str,
    collection: &str,
    rkey: &str,
) -> Result<String, RecordUriError> {
    Ok(RecordUri::new(authority, collection, rkey)?.to_string())
}

/// Converts a list record URI into the app-relative list page path.
///
/// Input that does not parse as a record URI yields an empty string.
pub fn list_uri_to_href(at_uri: &str) -> String {
    match at_uri.parse::<RecordUri>() {
        Ok(uri) => format!("/profile/{}/lists/{}", uri.authority, uri.rkey),
        Err(_) => String::new(),
    }
}

/// Converts a feed generator record URI into the app-relative feed page path.
///
/// Input that does not parse as a record URI yields an empty string.
pub fn feed_uri_to_href(at_uri: &str) -> String {
    match at_uri.parse::<RecordUri>() {
        Ok(uri) => format!("/profile/{}/feed/{}", uri.authority, uri.rkey),
        Err(_) => String::new(),
    }
}
