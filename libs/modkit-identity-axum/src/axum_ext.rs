//! Axum extractors and middleware for the security context

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use modkit_identity::{IdentityError, SecurityContext};

use crate::{
    config::{IdentityLayerConfig, MissingContextMode},
    errors::IdentityRejection,
};

fn context_from_parts(parts: &Parts) -> Result<&SecurityContext, IdentityRejection> {
    parts
        .extensions
        .get::<SecurityContext>()
        .ok_or(IdentityRejection::MissingContext)
}

/// Extractor for the request's `SecurityContext`.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub SecurityContext);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        context_from_parts(parts).cloned().map(CurrentIdentity)
    }
}

/// Extractor for the caller's login. Rejects with `401` when none resolves.
///
/// Anonymous contexts resolve to their anonymous principal id; use
/// [`Authenticated`] to turn those away.
#[derive(Debug, Clone)]
pub struct CurrentLogin(pub String);

impl<S> FromRequestParts<S> for CurrentLogin
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = context_from_parts(parts)?;
        modkit_identity::require_login(ctx)
            .map(|login| CurrentLogin(login.to_owned()))
            .map_err(|_| IdentityRejection::Unauthenticated)
    }
}

/// Extractor that only admits authenticated callers.
///
/// Anonymous callers, callers without authorities and contexts with no
/// authentication at all get `401`. A request without any context yields
/// `500`.
#[derive(Debug, Clone)]
pub struct Authenticated(pub SecurityContext);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = context_from_parts(parts)?;
        match modkit_identity::is_authenticated(ctx) {
            Ok(true) => Ok(Authenticated(ctx.clone())),
            Ok(false) => Err(IdentityRejection::Unauthenticated),
            // `is_authenticated` never yields `NoCurrentLogin`.
            Err(IdentityError::MissingAuthentication | IdentityError::NoCurrentLogin) => {
                Err(IdentityRejection::MissingAuthentication)
            }
        }
    }
}

/// Middleware that guarantees every request carries a `SecurityContext`.
///
/// A context inserted by earlier middleware is left untouched. Otherwise the
/// configured [`MissingContextMode`] decides what happens.
///
/// # Example
/// ```ignore
/// let cfg = Arc::new(IdentityLayerConfig::default());
/// router = router.layer(axum::middleware::from_fn_with_state(cfg, ensure_security_context));
/// ```
pub async fn ensure_security_context(
    State(cfg): State<Arc<IdentityLayerConfig>>,
    mut req: Request,
    next: Next,
) -> Response {
    if req.extensions().get::<SecurityContext>().is_some() {
        return next.run(req).await;
    }

    let ctx = match cfg.missing_context {
        MissingContextMode::Anonymous => {
            tracing::debug!(
                principal = %cfg.anonymous_principal,
                "no security context on request, inserting anonymous context"
            );
            SecurityContext::anonymous_as(&cfg.anonymous_principal)
        }
        MissingContextMode::Empty => {
            tracing::debug!("no security context on request, inserting empty context");
            SecurityContext::empty()
        }
        MissingContextMode::Reject => {
            return IdentityRejection::Unauthenticated.into_response();
        }
    };

    req.extensions_mut().insert(ctx);
    next.run(req).await
}

// Note: the middleware and extractors are exercised through a full Router in tests/context_layer.rs.
