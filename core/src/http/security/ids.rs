//! Well-known component identities.
//!
//! Several assembly steps locate a specific collaborator by identity rather
//! than by capability. The identities live here so registrants and the
//! assembler agree on the spelling.
//!
//! # Spring Security Equivalent
//! `org.springframework.security.config.BeanIds`

/// The reserved identity of the form-login entry point. Entry point
/// resolution only ever succeeds through this identity.
pub const FORM_LOGIN_ENTRY_POINT: &str = "formLoginEntryPoint";

/// The filter that materializes the session-backed security context.
/// Required whenever a concurrent-session filter is registered.
pub const SESSION_CONTEXT_INTEGRATION_FILTER: &str = "sessionContextIntegrationFilter";

/// The chain dispatcher itself, when registered alongside the filters it
/// dispatches to.
pub const FILTER_CHAIN_DISPATCHER: &str = "filterChainDispatcher";

/// The exception translation filter whose configuration receives the
/// resolved entry point.
pub const EXCEPTION_TRANSLATION_FILTER: &str = "exceptionTranslationFilter";

/// Registration key for the method security startup post-processor.
pub const METHOD_SECURITY_POST_PROCESSOR: &str = "methodSecurityPostProcessor";
