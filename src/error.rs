//! Error types shared across the crate.
//!
//! The classification helpers never panic and never log. Operations with a
//! documented string or boolean fallback apply it internally; the
//! Result-based cores surface these errors for callers that want to handle
//! (or log) the failure themselves.

use thiserror::Error;

/// The input could not be parsed as an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an absolute URL: {input:?}")]
pub struct UnparseableUrl {
    /// The rejected input, unchanged.
    pub input: String,
}

impl UnparseableUrl {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Errors raised while building or parsing an `at://` record URI.
///
/// Unlike the URL helpers, [`make_record_uri`](crate::domain::record_uri::make_record_uri)
/// propagates these instead of falling back: a malformed identifier
/// component is an input-contract violation on the caller's side, not a
/// runtime fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordUriError {
    #[error("record URI authority must not be empty")]
    EmptyAuthority,

    #[error("record URI collection must not be empty")]
    EmptyCollection,

    #[error("record URI record key must not be empty")]
    EmptyRecordKey,

    #[error("record URI component {component:?} must not contain '/', '?', '#', or whitespace")]
    InvalidComponent { component: String },

    #[error("not an at:// record URI: {input:?}")]
    InvalidSyntax { input: String },
}
