//! Manager collaborator seams.
//!
//! The assembler attaches these to method security interceptors but never
//! calls them: authentication and access decisions happen at request time,
//! outside this crate.
//!
//! # Spring Security Equivalent
//! `AuthenticationManager` / `AccessDecisionManager`

use crate::http::auth::access::ConfigAttribute;
use crate::http::security::user_details::UserDetails;

/// Authenticates a principal from submitted credentials.
pub trait AuthenticationManager: Send + Sync {
    fn authenticate(&self, username: &str, credentials: &str) -> Option<UserDetails>;
}

impl std::fmt::Debug for dyn AuthenticationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn AuthenticationManager")
    }
}

/// Decides whether an authenticated user satisfies a set of access
/// attributes.
pub trait AccessDecisionManager: Send + Sync {
    fn decide(&self, user: &UserDetails, attributes: &[ConfigAttribute]) -> bool;
}
