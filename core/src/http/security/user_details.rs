//! User details lookup.
//!
//! # Spring Security Equivalent
//! `UserDetailsService` / `UserDetails`

use std::collections::HashMap;

/// Core user information loaded by a [`UserDetailsService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub username: String,
    pub authorities: Vec<String>,
}

impl UserDetails {
    pub fn new(username: &str) -> Self {
        UserDetails {
            username: username.to_string(),
            authorities: Vec::new(),
        }
    }

    pub fn authorities(mut self, authorities: Vec<&str>) -> Self {
        self.authorities = authorities.into_iter().map(String::from).collect();
        self
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

/// Loads user details by username. External collaborator seam.
pub trait UserDetailsService: Send + Sync {
    fn load_user(&self, username: &str) -> Option<UserDetails>;
}

/// In-memory user store, mainly for tests and examples.
///
/// # Spring Security Equivalent
/// `InMemoryUserDetailsManager`
#[derive(Default)]
pub struct InMemoryUserDetailsService {
    users: HashMap<String, UserDetails>,
}

impl InMemoryUserDetailsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: UserDetails) -> Self {
        self.users.insert(user.username.clone(), user);
        self
    }
}

impl UserDetailsService for InMemoryUserDetailsService {
    fn load_user(&self, username: &str) -> Option<UserDetails> {
        self.users.get(username).cloned()
    }
}
