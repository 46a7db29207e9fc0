//! Commonly used identity types, for glob-free one-line imports.
pub use crate::{
    Authentication, Authorities, GrantedAuthority, IdentityError, Principal, SecurityContext,
    UserDetails, authorities,
};
