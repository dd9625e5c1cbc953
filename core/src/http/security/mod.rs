//! Security assembly module.
//!
//! # Spring Security Equivalent
//! `org.springframework.security.config`
//!
//! # Module Structure
//!
//! - `filter` - the filter model (declared order, capability tags)
//! - `registry` - the explicit component registry assembly consumes
//! - `chain` - filter chains, the pattern map and the chain dispatcher
//! - `ant_matcher` - ant-style URL pattern matching
//! - `assembler` - the one-shot startup assembly
//! - `entry_point` - authentication entry point selection
//! - `remember_me` - remember-me services and their wiring
//! - `postprocess` - ordered startup post-processors
//! - `manager` - authentication / access decision collaborator seams
//! - `user_details` - user details lookup
//! - `ids` - well-known component identities

// Re-exports for convenience
pub use assembler::{
    assemble, assemble_with, ChainAssembly, SecurityAssembly, SessionIntegrationConfig,
};
pub use ant_matcher::UrlMatcher;
pub use chain::{FilterChain, FilterChainDispatcher, FilterChainMap, UNIVERSAL_MATCH_PATTERN};
pub use entry_point::{
    resolve_entry_point, AuthenticationEntryPoint, ExceptionTranslationConfig, FormLoginEntryPoint,
};
pub use filter::{FilterCapability, FilterRegistration, SecurityFilter};
pub use manager::{AccessDecisionManager, AuthenticationManager};
pub use postprocess::{
    AssemblyContext, MethodSecurityPostProcessor, PostProcessorSet, StartupPostProcessor,
    HIGHEST_PRECEDENCE,
};
pub use registry::{Lookup, SecurityRegistry};
pub use remember_me::{
    wire_authentication_filters, ConfiguredAuthenticationFilter, RememberMeConfig,
    RememberMeServices, RememberMeToken, TokenBasedRememberMeServices,
};
pub use user_details::{InMemoryUserDetailsService, UserDetails, UserDetailsService};

pub mod ant_matcher;
pub mod assembler;
pub mod chain;
pub mod entry_point;
pub mod filter;
pub mod ids;
pub mod manager;
pub mod postprocess;
pub mod registry;
pub mod remember_me;
pub mod user_details;
