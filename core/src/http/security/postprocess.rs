//! Startup post-processing.
//!
//! Some assembly work must run before anything else inspects the objects
//! it configures. Post-processors declare an order; the set runs them
//! exactly once, ascending, with ties broken by insertion. Registration is
//! idempotent and keyed, so a processor can be ensured from several call
//! sites without ending up in the set twice.
//!
//! # Spring Security Equivalent
//! `BeanFactoryPostProcessor` + `Ordered`, and the register-if-absent done
//! by `InterceptMethodsBeanDefinitionDecorator`

use tracing::debug;

use crate::http::auth::method::{
    configure_security_interceptor, MethodDefinitionSource, MethodSecurityInterceptor,
};
use crate::http::error::SecurityConfigError;
use crate::http::security::registry::SecurityRegistry;

/// Runs before every processor with a larger order value.
pub const HIGHEST_PRECEDENCE: i32 = i32::MIN;

/// Mutable state threaded through the post-processing phase.
pub struct AssemblyContext<'r> {
    registry: &'r SecurityRegistry,
    definition_sources: Vec<MethodDefinitionSource>,
    interceptors: Vec<MethodSecurityInterceptor>,
}

impl<'r> AssemblyContext<'r> {
    pub fn new(registry: &'r SecurityRegistry, definition_sources: Vec<MethodDefinitionSource>) -> Self {
        AssemblyContext {
            registry,
            definition_sources,
            interceptors: Vec::new(),
        }
    }

    pub fn registry(&self) -> &SecurityRegistry {
        self.registry
    }

    /// Compiled definition sources awaiting configuration.
    pub fn take_definition_sources(&mut self) -> Vec<MethodDefinitionSource> {
        std::mem::take(&mut self.definition_sources)
    }

    pub fn add_interceptor(&mut self, interceptor: MethodSecurityInterceptor) {
        self.interceptors.push(interceptor);
    }

    pub fn interceptors(&self) -> &[MethodSecurityInterceptor] {
        &self.interceptors
    }

    pub fn into_interceptors(self) -> Vec<MethodSecurityInterceptor> {
        self.interceptors
    }
}

/// A startup-time configuration step.
pub trait StartupPostProcessor {
    /// Relative priority; smaller runs earlier.
    fn order(&self) -> i32 {
        0
    }

    fn post_process(&self, context: &mut AssemblyContext<'_>) -> Result<(), SecurityConfigError>;
}

/// The set of post-processors for one assembly run.
#[derive(Default)]
pub struct PostProcessorSet {
    entries: Vec<(String, Box<dyn StartupPostProcessor>)>,
}

impl PostProcessorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a processor under a stable key unless one with that key
    /// already exists. Safe to invoke unconditionally from any call site.
    pub fn ensure_registered<F>(&mut self, key: &str, constructor: F)
    where
        F: FnOnce() -> Box<dyn StartupPostProcessor>,
    {
        if self.entries.iter().any(|(existing, _)| existing == key) {
            debug!(key, "post-processor already registered");
            return;
        }

        self.entries.push((key.to_string(), constructor()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs every processor once, ascending by order, insertion order for
    /// ties.
    pub fn run(&self, context: &mut AssemblyContext<'_>) -> Result<(), SecurityConfigError> {
        let mut indices: Vec<usize> = (0..self.entries.len()).collect();
        indices.sort_by_key(|&i| self.entries[i].1.order());

        for i in indices {
            let (key, processor) = &self.entries[i];
            debug!(key, order = processor.order(), "running startup post-processor");
            processor.post_process(context)?;
        }

        Ok(())
    }
}

/// Configures every compiled method security definition with the manager
/// singletons. Scheduled at [`HIGHEST_PRECEDENCE`] so interceptors are
/// fully configured before any later step can consult them.
pub struct MethodSecurityPostProcessor;

impl StartupPostProcessor for MethodSecurityPostProcessor {
    fn order(&self) -> i32 {
        HIGHEST_PRECEDENCE
    }

    fn post_process(&self, context: &mut AssemblyContext<'_>) -> Result<(), SecurityConfigError> {
        for source in context.take_definition_sources() {
            let interceptor = configure_security_interceptor(context.registry(), source)?;
            context.add_interceptor(interceptor);
        }

        Ok(())
    }
}
