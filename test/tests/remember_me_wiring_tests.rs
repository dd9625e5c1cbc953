//! Remember-me wiring tests.

use std::sync::Arc;

use actix_bastion_core::http::security::{
    assemble, FilterCapability, FilterChainDispatcher, RememberMeConfig, RememberMeServices,
    SecurityRegistry, TokenBasedRememberMeServices,
};

use actix_bastion_test::{register_baseline, StubFilter};

fn services(key: &str) -> Arc<dyn RememberMeServices> {
    Arc::new(TokenBasedRememberMeServices::new(
        RememberMeConfig::new(key).cookie_secure(false),
    ))
}

fn registry_with_auth_filters() -> SecurityRegistry {
    let mut registry = SecurityRegistry::new();
    register_baseline(&mut registry);
    registry.register_filter(
        "formLoginFilter",
        Arc::new(StubFilter::ordered(10).with_capability(FilterCapability::AuthenticationProcessing)),
    );
    registry.register_filter(
        "basicAuthFilter",
        Arc::new(StubFilter::ordered(20).with_capability(FilterCapability::AuthenticationProcessing)),
    );
    registry.register_filter("plainFilter", Arc::new(StubFilter::ordered(30)));
    registry
}

#[test]
fn test_first_registered_service_injected_into_every_auth_filter() {
    let mut registry = registry_with_auth_filters();

    let first = services("first-key");
    let second = services("second-key");
    registry.register_remember_me_services("rememberMeA", Arc::clone(&first));
    registry.register_remember_me_services("rememberMeB", Arc::clone(&second));

    let mut dispatcher = FilterChainDispatcher::new();
    let assembly = assemble(&registry, &mut dispatcher).unwrap();

    // Only the two authentication-processing filters are wired.
    assert_eq!(assembly.authentication_filters.len(), 2);

    for configured in &assembly.authentication_filters {
        let wired = configured.remember_me_services().unwrap();
        assert!(Arc::ptr_eq(wired, &first));
    }
}

#[test]
fn test_absent_remember_me_is_silent() {
    let registry = registry_with_auth_filters();

    let mut dispatcher = FilterChainDispatcher::new();
    let assembly = assemble(&registry, &mut dispatcher).unwrap();

    assert_eq!(assembly.authentication_filters.len(), 2);
    for configured in &assembly.authentication_filters {
        assert!(configured.remember_me_services().is_none());
    }
}

#[test]
fn test_wired_filters_keep_registration_identity() {
    let mut registry = registry_with_auth_filters();
    registry.register_remember_me_services("rememberMe", services("key"));

    let mut dispatcher = FilterChainDispatcher::new();
    let assembly = assemble(&registry, &mut dispatcher).unwrap();

    let ids: Vec<&str> = assembly
        .authentication_filters
        .iter()
        .map(|configured| configured.id())
        .collect();
    assert_eq!(ids, vec!["formLoginFilter", "basicAuthFilter"]);
}
