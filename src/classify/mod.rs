//! URL classification: origin tests, deep-link shapes, display forms, and
//! the deceptive-link policy.
//!
//! - [`classifier`] - Origin-dependent operations on [`LinkClassifier`]
//! - [`display`] - Origin-independent display helpers
//! - [`trust`] - Label inspection for the deceptive-link policy
//! - [`patterns`] - Compiled path and identifier patterns

pub mod classifier;
pub mod display;
pub mod patterns;
pub mod trust;

pub use classifier::LinkClassifier;
pub use display::to_short_url;
pub use trust::{is_possibly_a_url, label_to_domain};
