//! One-shot startup assembly.
//!
//! Everything here runs single-threaded, exactly once, before the first
//! request is admitted. It either produces a complete [`SecurityAssembly`]
//! or fails with the first configuration defect found; no partial chain is
//! ever installed.
//!
//! # Spring Security Equivalent
//! `HttpSecurityConfigPostProcessor`

use tracing::{debug, info};

use crate::http::auth::method::{compile_declaration, MethodSecurityInterceptor};
use crate::http::error::SecurityConfigError;
use crate::http::security::chain::{
    FilterChain, FilterChainDispatcher, FilterChainMap, UNIVERSAL_MATCH_PATTERN,
};
use crate::http::security::entry_point::{resolve_entry_point, ExceptionTranslationConfig};
use crate::http::security::filter::{FilterCapability, FilterRegistration};
use crate::http::security::ids;
use crate::http::security::postprocess::{
    AssemblyContext, MethodSecurityPostProcessor, PostProcessorSet,
};
use crate::http::security::registry::SecurityRegistry;
use crate::http::security::remember_me::{wire_authentication_filters, ConfiguredAuthenticationFilter};

/// The session context integration filter's assembled configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionIntegrationConfig {
    force_eager_session_creation: bool,
}

impl SessionIntegrationConfig {
    pub fn force_eager_session_creation(&self) -> bool {
        self.force_eager_session_creation
    }
}

/// Everything assembly produces. Read-mostly shared state from here on:
/// request threads walk the chains and consult the rule tables, and
/// nothing mutates these structures again.
#[derive(Debug)]
pub struct SecurityAssembly {
    pub filter_chains: FilterChainMap,
    pub session_integration: SessionIntegrationConfig,
    pub exception_translation: ExceptionTranslationConfig,
    pub authentication_filters: Vec<ConfiguredAuthenticationFilter>,
    pub method_interceptors: Vec<MethodSecurityInterceptor>,
}

/// Orders the registered filters into the default chain.
///
/// The chain dispatcher is excluded; everything else must declare an
/// order. Sorting is by declared order ascending with ties broken by
/// registration sequence, so the result is a total order even with
/// duplicate priorities.
fn order_filters(registry: &SecurityRegistry) -> Result<Vec<FilterRegistration>, SecurityConfigError> {
    let mut candidates: Vec<FilterRegistration> = registry
        .filters()
        .iter()
        .filter(|reg| !reg.has_capability(FilterCapability::ChainDispatcher))
        .cloned()
        .collect();

    if candidates.is_empty() {
        return Err(SecurityConfigError::NoFiltersRegistered);
    }

    for reg in &candidates {
        if reg.declared_order().is_none() {
            return Err(SecurityConfigError::FilterOrderMissing {
                id: reg.id().to_string(),
            });
        }
    }

    candidates.sort_by_key(|reg| (reg.declared_order().unwrap_or(i32::MAX), reg.sequence()));

    Ok(candidates)
}

/// The chain assembler's output: the finished pattern map and the session
/// integration flags derived from the filter set.
pub struct ChainAssembly {
    pub chain_map: FilterChainMap,
    pub session_integration: SessionIntegrationConfig,
}

/// Builds the default filter chain and merges it into a copy of the
/// dispatcher's current pattern map under the universal pattern. Does not
/// install the result; the caller writes it back in one assignment.
pub fn assemble_chains(
    registry: &SecurityRegistry,
    dispatcher: &FilterChainDispatcher,
) -> Result<ChainAssembly, SecurityConfigError> {
    let ordered = order_filters(registry)?;
    debug!(chain = ?ordered.iter().map(|r| r.id()).collect::<Vec<_>>(), "default filter chain ordered");

    // The read is a defensive copy; narrower patterns registered by other
    // parties survive untouched.
    let mut chain_map = dispatcher.chain_map();
    chain_map.insert(FilterChain::new(UNIVERSAL_MATCH_PATTERN, ordered));

    let mut session_integration = SessionIntegrationConfig::default();

    let concurrent_session_in_use = registry
        .filters()
        .iter()
        .any(|reg| reg.has_capability(FilterCapability::ConcurrentSessionControl));

    if concurrent_session_in_use {
        if registry
            .filter_by_id(ids::SESSION_CONTEXT_INTEGRATION_FILTER)
            .is_none()
        {
            return Err(SecurityConfigError::SessionIntegrationMissing {
                expected_id: ids::SESSION_CONTEXT_INTEGRATION_FILTER.to_string(),
            });
        }

        info!("concurrent session filter in use, forcing eager session creation");
        session_integration.force_eager_session_creation = true;
    }

    Ok(ChainAssembly {
        chain_map,
        session_integration,
    })
}

/// Runs the whole assembly with an additional caller-supplied set of
/// startup post-processors. The method security post-processor is ensured
/// into the set at highest precedence, so interceptors are fully
/// configured before any other processor can inspect them.
pub fn assemble_with(
    registry: &SecurityRegistry,
    dispatcher: &mut FilterChainDispatcher,
    mut post_processors: PostProcessorSet,
) -> Result<SecurityAssembly, SecurityConfigError> {
    post_processors.ensure_registered(ids::METHOD_SECURITY_POST_PROCESSOR, || {
        Box::new(MethodSecurityPostProcessor)
    });

    // Compile declarative method-protection entries in document order.
    let definition_sources = registry
        .method_declarations()
        .iter()
        .map(|declaration| compile_declaration(declaration, registry.target_types()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut context = AssemblyContext::new(registry, definition_sources);
    post_processors.run(&mut context)?;
    let method_interceptors = context.into_interceptors();

    let exception_translation = resolve_entry_point(registry)?;
    let authentication_filters = wire_authentication_filters(registry);

    let chains = assemble_chains(registry, dispatcher)?;

    // Single assignment: the dispatcher never observes a partial map.
    dispatcher.set_chain_map(chains.chain_map.clone());
    info!(patterns = chains.chain_map.len(), "security filter chains installed");

    Ok(SecurityAssembly {
        filter_chains: chains.chain_map,
        session_integration: chains.session_integration,
        exception_translation,
        authentication_filters,
        method_interceptors,
    })
}

/// Runs the whole assembly: compile method security declarations, run the
/// startup post-processors, resolve the entry point, wire remember-me and
/// install the ordered filter chain.
pub fn assemble(
    registry: &SecurityRegistry,
    dispatcher: &mut FilterChainDispatcher,
) -> Result<SecurityAssembly, SecurityConfigError> {
    assemble_with(registry, dispatcher, PostProcessorSet::new())
}
