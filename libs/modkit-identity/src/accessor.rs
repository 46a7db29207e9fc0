//! Queries over the current caller's [`SecurityContext`].
//!
//! All functions are pure reads of the context passed in; none of them
//! mutate it or touch global state, so they can be called from any task.

use crate::authentication::Authentication;
use crate::context::SecurityContext;
use crate::error::IdentityError;
use crate::principal::Principal;

/// Login of the current caller.
///
/// Returns the username of a user-record principal, or the identifier itself
/// for a raw-id principal. Returns `None` when the context has no
/// authentication or the authentication has no principal.
#[must_use]
pub fn current_login(ctx: &SecurityContext) -> Option<&str> {
    let login = ctx
        .authentication()
        .and_then(Authentication::principal)
        .map(Principal::login);
    tracing::trace!(login = ?login, "resolved current login");
    login
}

/// Whether the current caller is really authenticated.
///
/// True when the authentication carries a non-empty set of authorities that
/// does not include [`authorities::ANONYMOUS`](crate::authorities::ANONYMOUS).
/// An absent or empty authority collection yields `false`; the anonymous
/// marker yields `false` whatever else is granted.
///
/// # Errors
/// Returns [`IdentityError::MissingAuthentication`] if the context carries no
/// authentication at all. Upstream middleware must always establish one, even
/// for anonymous callers, so reaching this is a wiring fault rather than an
/// unauthenticated request.
pub fn is_authenticated(ctx: &SecurityContext) -> Result<bool, IdentityError> {
    let Some(authentication) = ctx.authentication() else {
        tracing::debug!("authentication check on a context without authentication");
        return Err(IdentityError::MissingAuthentication);
    };

    Ok(authentication
        .authorities()
        .is_some_and(|granted| !granted.is_empty() && !granted.contains_anonymous()))
}

/// Whether the current caller was granted `authority`.
///
/// A context without authentication or without authorities has none.
#[must_use]
pub fn has_authority(ctx: &SecurityContext, authority: &str) -> bool {
    ctx.authentication()
        .and_then(Authentication::authorities)
        .is_some_and(|granted| granted.contains(authority))
}

/// Like [`current_login`], for call sites that cannot proceed without a user.
///
/// # Errors
/// Returns [`IdentityError::NoCurrentLogin`] when no login resolves.
pub fn require_login(ctx: &SecurityContext) -> Result<&str, IdentityError> {
    current_login(ctx).ok_or(IdentityError::NoCurrentLogin)
}
