use serde::{Deserialize, Serialize};

/// User record resolved by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    username: String,
}

impl UserDetails {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// The identity-bearing value inside an [`Authentication`](crate::Authentication).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    /// Full user record.
    UserRecord(UserDetails),
    /// Bare identifier, e.g. a login name or [`ANONYMOUS_PRINCIPAL`](crate::ANONYMOUS_PRINCIPAL).
    RawId { value: String },
}

impl Principal {
    #[must_use]
    pub fn user(username: impl Into<String>) -> Self {
        Self::UserRecord(UserDetails::new(username))
    }

    #[must_use]
    pub fn raw(value: impl Into<String>) -> Self {
        Self::RawId {
            value: value.into(),
        }
    }

    /// Login name carried by this principal.
    #[must_use]
    pub fn login(&self) -> &str {
        match self {
            Self::UserRecord(user) => user.username(),
            Self::RawId { value } => value,
        }
    }
}

impl From<UserDetails> for Principal {
    fn from(user: UserDetails) -> Self {
        Self::UserRecord(user)
    }
}
