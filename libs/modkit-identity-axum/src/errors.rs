use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Rejections produced by the identity extractors and middleware.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRejection {
    /// No `SecurityContext` in the request extensions. The identity layer is
    /// not wired.
    #[error("security context not available - identity middleware not configured")]
    MissingContext,

    /// The context carries no authentication, e.g. one inserted in `empty`
    /// mode. Answered as `401`: the caller has no identity at all.
    #[error("security context carries no authentication")]
    MissingAuthentication,

    /// The caller is not authenticated.
    #[error("authentication required")]
    Unauthenticated,
}

#[derive(Serialize)]
struct ProblemBody {
    status: u16,
    title: &'static str,
    detail: String,
}

impl IdentityRejection {
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self {
            Self::MissingContext => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingAuthentication | Self::Unauthenticated => StatusCode::UNAUTHORIZED,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::MissingContext => "Internal Server Error",
            Self::MissingAuthentication | Self::Unauthenticated => "Unauthorized",
        }
    }
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        match self {
            Self::MissingContext => tracing::error!("{self}"),
            Self::MissingAuthentication | Self::Unauthenticated => tracing::debug!("{self}"),
        }
        let status = self.status();
        let body = ProblemBody {
            status: status.as_u16(),
            title: self.title(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
