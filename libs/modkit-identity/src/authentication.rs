use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::authority::{Authorities, GrantedAuthority};
use crate::principal::Principal;

/// Resolved identity of the current caller together with its authorities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authentication {
    /// Who the caller is. `None` when the provider resolved no principal.
    principal: Option<Principal>,
    /// Granted authorities. `None` means the provider supplied no collection
    /// at all, which is distinct from an empty one.
    authorities: Option<Authorities>,
    /// Credentials the caller presented. Never serialized; `Debug` redacts it.
    #[serde(skip)]
    credentials: Option<SecretString>,
}

impl Authentication {
    #[must_use]
    pub fn builder() -> AuthenticationBuilder {
        AuthenticationBuilder::default()
    }

    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[must_use]
    pub fn authorities(&self) -> Option<&Authorities> {
        self.authorities.as_ref()
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&SecretString> {
        self.credentials.as_ref()
    }
}

#[derive(Default)]
pub struct AuthenticationBuilder {
    principal: Option<Principal>,
    authorities: Option<Authorities>,
    credentials: Option<SecretString>,
}

impl AuthenticationBuilder {
    #[must_use]
    pub fn principal(mut self, principal: impl Into<Principal>) -> Self {
        self.principal = Some(principal.into());
        self
    }

    /// Set the authority collection, replacing any earlier one.
    #[must_use]
    pub fn authorities(mut self, authorities: Authorities) -> Self {
        self.authorities = Some(authorities);
        self
    }

    /// Add one authority, creating the collection if needed.
    #[must_use]
    pub fn authority(mut self, authority: impl Into<GrantedAuthority>) -> Self {
        self.authorities
            .get_or_insert_with(Authorities::new)
            .insert(authority);
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: impl Into<SecretString>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Authentication {
        Authentication {
            principal: self.principal,
            authorities: self.authorities,
            credentials: self.credentials,
        }
    }
}
