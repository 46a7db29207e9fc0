//! Error types for identity lookups.

use thiserror::Error;

/// Errors returned by the identity accessor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    /// The security context carries no `Authentication` at all.
    ///
    /// Upstream middleware is expected to populate every request context,
    /// even unauthenticated ones (see [`SecurityContext::anonymous`]).
    ///
    /// [`SecurityContext::anonymous`]: crate::SecurityContext::anonymous
    #[error("security context has no authentication")]
    MissingAuthentication,

    /// A login was required but the context does not resolve to one.
    #[error("no login available for the current caller")]
    NoCurrentLogin,
}
