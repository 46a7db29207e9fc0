#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Axum glue for [`modkit_identity`].
//!
//! Upstream authentication middleware stores a [`SecurityContext`] in the
//! request extensions. [`ensure_security_context`] guarantees one is present,
//! and the extractors in [`axum_ext`] hand it (or values derived from it) to
//! handlers.
//!
//! [`SecurityContext`]: modkit_identity::SecurityContext
pub mod axum_ext;
pub mod config;
pub mod errors;

pub use axum_ext::{Authenticated, CurrentIdentity, CurrentLogin, ensure_security_context};
pub use config::{IdentityLayerConfig, MissingContextMode};
pub use errors::IdentityRejection;
