//! # bsky-links
//!
//! URL classification and link-trust helpers for Bluesky clients.
//!
//! The crate answers yes/no and transformation questions about link strings
//! without mutating external state and without letting a parse failure
//! escape: every operation either returns a tagged outcome or applies its
//! documented fallback. All operations are synchronous and pure, safe to
//! call from any number of threads without coordination.
//!
//! ## Architecture
//!
//! - **Domain layer** ([`domain`]) - Value types: `at://` record URIs and
//!   apex-domain splits backed by the public suffix list
//! - **Classification layer** ([`classify`]) - Origin tests, deep-link
//!   shapes, display forms, and the deceptive-link policy
//! - **Configuration** ([`config`]) - Canonical origin, display name, and
//!   trusted suffixes injected from the environment
//! - **Errors** ([`error`]) - Tagged parse outcomes; the library itself
//!   never logs and never panics
//!
//! ## Quick start
//!
//! ```
//! use bsky_links::prelude::*;
//! use url::Url;
//!
//! let classifier = LinkClassifier::with_origin(
//!     Url::parse("https://bsky.app").unwrap(),
//!     "Bluesky Social",
//!     &["bsky.app".to_string(), "bsky.social".to_string()],
//! );
//!
//! assert!(classifier.is_app_url("https://bsky.app/profile/alice.test"));
//! assert_eq!(classifier.to_nice_domain("https://bsky.app"), "Bluesky Social");
//! assert_eq!(to_short_url("https://bsky.app"), "bsky.app");
//! ```
//!
//! ## Configuration
//!
//! Binary consumers load the origin settings from the environment via
//! [`config::load_from_env`]; see the [`config`] module for the variables.

pub mod classify;
pub mod config;
pub mod domain;
pub mod error;

pub use error::{RecordUriError, UnparseableUrl};

/// Commonly used types and operations for external consumers.
///
/// Re-exports frequently used items to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::classify::classifier::LinkClassifier;
    pub use crate::classify::display::to_short_url;
    pub use crate::classify::trust::{is_possibly_a_url, label_to_domain};
    pub use crate::config::Config;
    pub use crate::domain::apex::{ApexDomain, is_valid_domain, split_apex_domain};
    pub use crate::domain::record_uri::{
        RecordUri, feed_uri_to_href, list_uri_to_href, make_record_uri,
    };
    pub use crate::error::{RecordUriError, UnparseableUrl};
}
