//! Shared fixtures for the integration tests.

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};

use actix_bastion_core::http::auth::ConfigAttribute;
use actix_bastion_core::http::security::{
    ids, AccessDecisionManager, AuthenticationEntryPoint, AuthenticationManager, FilterCapability,
    SecurityFilter, SecurityRegistry, UserDetails,
};

/// A filter with a fixed declared order and capability set.
pub struct StubFilter {
    order: Option<i32>,
    capabilities: Vec<FilterCapability>,
}

impl StubFilter {
    pub fn ordered(order: i32) -> Self {
        StubFilter {
            order: Some(order),
            capabilities: Vec::new(),
        }
    }

    pub fn unordered() -> Self {
        StubFilter {
            order: None,
            capabilities: Vec::new(),
        }
    }

    pub fn with_capability(mut self, capability: FilterCapability) -> Self {
        self.capabilities.push(capability);
        self
    }
}

impl SecurityFilter for StubFilter {
    fn declared_order(&self) -> Option<i32> {
        self.order
    }

    fn capabilities(&self) -> &[FilterCapability] {
        &self.capabilities
    }
}

/// Entry point that challenges with a 401. Useful as a "wrong identity"
/// candidate: resolution must care about identity, not type.
pub struct ChallengeEntryPoint;

impl AuthenticationEntryPoint for ChallengeEntryPoint {
    fn commence(&self, _req: &HttpRequest) -> HttpResponse {
        HttpResponse::Unauthorized().finish()
    }
}

/// Manager stub that authenticates nobody.
pub struct DenyAuthenticationManager;

impl AuthenticationManager for DenyAuthenticationManager {
    fn authenticate(&self, _username: &str, _credentials: &str) -> Option<UserDetails> {
        None
    }
}

/// Manager stub that grants everything.
pub struct PermitAllDecisionManager;

impl AccessDecisionManager for PermitAllDecisionManager {
    fn decide(&self, _user: &UserDetails, _attributes: &[ConfigAttribute]) -> bool {
        true
    }
}

/// Registers the form-login entry point and both manager singletons, the
/// minimum every successful assembly needs.
pub fn register_baseline(registry: &mut SecurityRegistry) {
    registry.register_entry_point(ids::FORM_LOGIN_ENTRY_POINT, Arc::new(ChallengeEntryPoint));
    registry.register_authentication_manager("authenticationManager", Arc::new(DenyAuthenticationManager));
    registry.register_access_decision_manager("accessDecisionManager", Arc::new(PermitAllDecisionManager));
}

/// A registry with the baseline singletons and three ordered filters.
pub fn baseline_registry() -> SecurityRegistry {
    let mut registry = SecurityRegistry::new();
    register_baseline(&mut registry);
    registry.register_filter("filterA", Arc::new(StubFilter::ordered(10)));
    registry.register_filter("filterB", Arc::new(StubFilter::ordered(20)));
    registry.register_filter("filterC", Arc::new(StubFilter::ordered(30)));
    registry
}
