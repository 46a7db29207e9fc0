use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Well-known authority labels.
pub mod authorities {
    /// Administrator role.
    pub const ADMIN: &str = "ROLE_ADMIN";
    /// Regular signed-in user.
    pub const USER: &str = "ROLE_USER";
    /// Marks an authentication that stands for an unauthenticated caller.
    pub const ANONYMOUS: &str = "ROLE_ANONYMOUS";
}

/// Principal id used by [`SecurityContext::anonymous`](crate::SecurityContext::anonymous).
pub const ANONYMOUS_PRINCIPAL: &str = "anonymousUser";

/// A single capability or role label granted to an authentication.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrantedAuthority(String);

impl GrantedAuthority {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text, e.g. `ROLE_USER`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the anonymous marker.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.0 == authorities::ANONYMOUS
    }
}

impl Borrow<str> for GrantedAuthority {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GrantedAuthority {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for GrantedAuthority {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for GrantedAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unordered set of granted authorities.
///
/// Backed by a `BTreeSet` so iteration and serialization order are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authorities(BTreeSet<GrantedAuthority>);

impl Authorities {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an authority. Returns `false` if it was already present.
    pub fn insert(&mut self, authority: impl Into<GrantedAuthority>) -> bool {
        self.0.insert(authority.into())
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Whether the anonymous marker is among the authorities.
    #[must_use]
    pub fn contains_anonymous(&self) -> bool {
        self.contains(authorities::ANONYMOUS)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrantedAuthority> {
        self.0.iter()
    }
}

impl<A: Into<GrantedAuthority>> FromIterator<A> for Authorities {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Authorities {
    type Item = &'a GrantedAuthority;
    type IntoIter = std::collections::btree_set::Iter<'a, GrantedAuthority>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
