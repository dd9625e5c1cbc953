//! # Actix Bastion
//!
//! Spring Security-inspired startup assembly for an actix-web security layer.
//!
//! The hard part of a security filter stack is not any single filter but the
//! one-shot assembly step that runs before the first request: taking an
//! unordered set of independently registered components and turning it into
//! a configuration that is provably complete. This crate owns that step:
//!
//! - ordering the filter chain and installing it under the universal URL
//!   pattern of the chain dispatcher
//! - selecting exactly one authentication entry point for exception
//!   translation
//! - handing the optional remember-me services to every
//!   authentication-processing filter
//! - compiling declarative method-protection rules into configured
//!   method security interceptors
//!
//! Assembly either fully succeeds, yielding an immutable
//! [`http::security::SecurityAssembly`], or fails with a
//! [`http::error::SecurityConfigError`] naming the configuration defect.
//! Nothing is ever downgraded to a warning: a process with a malformed
//! security chain must not start.
//!
//! ## Example
//!
//! ```rust,ignore
//! use actix_bastion_core::http::security::{
//!     assemble, FilterChainDispatcher, SecurityRegistry,
//! };
//!
//! let mut registry = SecurityRegistry::new();
//! // register filters, entry points, managers...
//!
//! let mut dispatcher = FilterChainDispatcher::new();
//! let assembly = assemble(&registry, &mut dispatcher)?;
//! ```

pub mod http;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::http::error::SecurityConfigError;
    pub use crate::http::security::{
        assemble, AuthenticationEntryPoint, FilterCapability, FilterChainDispatcher,
        SecurityAssembly, SecurityFilter, SecurityRegistry,
    };
}
