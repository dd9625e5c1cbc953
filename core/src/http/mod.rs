//! HTTP security assembly.
//!
//! - `security` - filter model, registry, chain assembly and wiring
//! - `auth` - method-level security rules and interceptors
//! - `error` - configuration error types

pub mod auth;
pub mod error;
pub mod security;
