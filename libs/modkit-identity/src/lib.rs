#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Identity accessor for modkit services.
//!
//! A [`SecurityContext`] is built per request by upstream middleware and passed
//! explicitly to the code that needs it. The [`accessor`] functions answer two
//! questions about it: who is the current caller, and are they authenticated.
pub mod accessor;
pub mod authentication;
pub mod authority;
pub mod context;
pub mod error;
pub mod prelude;
pub mod principal;

pub use accessor::{current_login, has_authority, is_authenticated, require_login};
pub use authentication::{Authentication, AuthenticationBuilder};
pub use authority::{ANONYMOUS_PRINCIPAL, Authorities, GrantedAuthority, authorities};
pub use context::{SecurityContext, SecurityContextBuilder};
pub use error::IdentityError;
pub use principal::{Principal, UserDetails};
