use crate::accessor;
use crate::authentication::Authentication;
use crate::authority::{ANONYMOUS_PRINCIPAL, authorities};
use crate::error::IdentityError;
use crate::principal::Principal;

/// `SecurityContext` carries the resolved identity for a request or operation.
///
/// Built by authentication middleware and passed explicitly through the request
/// lifecycle. Holds at most one [`Authentication`]; this type never mutates it
/// after construction.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SecurityContext {
    #[serde(default)]
    authentication: Option<Authentication>,
}

impl SecurityContext {
    /// Create a new `SecurityContext` builder
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// A context with no authentication established yet.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A context for an unauthenticated caller: principal
    /// [`ANONYMOUS_PRINCIPAL`] with the single `ROLE_ANONYMOUS` authority.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::anonymous_as(ANONYMOUS_PRINCIPAL)
    }

    /// Like [`SecurityContext::anonymous`] with a custom principal id.
    #[must_use]
    pub fn anonymous_as(principal: &str) -> Self {
        Self::builder()
            .authentication(
                Authentication::builder()
                    .principal(Principal::raw(principal))
                    .authority(authorities::ANONYMOUS)
                    .build(),
            )
            .build()
    }

    /// Wrap an existing authentication.
    #[must_use]
    pub fn authenticated(authentication: Authentication) -> Self {
        Self {
            authentication: Some(authentication),
        }
    }

    #[must_use]
    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }

    /// See [`accessor::current_login`].
    #[must_use]
    pub fn current_login(&self) -> Option<&str> {
        accessor::current_login(self)
    }

    /// See [`accessor::is_authenticated`].
    ///
    /// # Errors
    /// Returns [`IdentityError::MissingAuthentication`] when no authentication is set.
    pub fn is_authenticated(&self) -> Result<bool, IdentityError> {
        accessor::is_authenticated(self)
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    authentication: Option<Authentication>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            authentication: self.authentication,
        }
    }
}
