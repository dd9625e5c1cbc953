//! Entry point resolution tests.

use std::sync::Arc;

use actix_bastion_core::http::error::SecurityConfigError;
use actix_bastion_core::http::security::{
    assemble, ids, AuthenticationEntryPoint, FilterChainDispatcher, FormLoginEntryPoint,
    SecurityRegistry,
};

use actix_bastion_test::{
    ChallengeEntryPoint, DenyAuthenticationManager, PermitAllDecisionManager, StubFilter,
};

fn registry_without_entry_points() -> SecurityRegistry {
    let mut registry = SecurityRegistry::new();
    registry.register_authentication_manager("authenticationManager", Arc::new(DenyAuthenticationManager));
    registry.register_access_decision_manager("accessDecisionManager", Arc::new(PermitAllDecisionManager));
    registry.register_filter("only", Arc::new(StubFilter::ordered(1)));
    registry
}

#[test]
fn test_reserved_identity_wins_over_other_candidates() {
    let mut registry = registry_without_entry_points();

    let form_login: Arc<dyn AuthenticationEntryPoint> = Arc::new(FormLoginEntryPoint::new("/login"));
    registry.register_entry_point("challenge", Arc::new(ChallengeEntryPoint));
    registry.register_entry_point(ids::FORM_LOGIN_ENTRY_POINT, Arc::clone(&form_login));

    let mut dispatcher = FilterChainDispatcher::new();
    let assembly = assemble(&registry, &mut dispatcher).unwrap();

    assert_eq!(
        assembly.exception_translation.entry_point_id(),
        ids::FORM_LOGIN_ENTRY_POINT
    );
    assert!(Arc::ptr_eq(
        assembly.exception_translation.entry_point(),
        &form_login
    ));
}

#[test]
fn test_single_candidate_without_reserved_identity_fails() {
    let mut registry = registry_without_entry_points();
    registry.register_entry_point("challenge", Arc::new(ChallengeEntryPoint));

    let mut dispatcher = FilterChainDispatcher::new();
    assert_eq!(
        assemble(&registry, &mut dispatcher).unwrap_err(),
        SecurityConfigError::EntryPointUnresolved
    );
}

#[test]
fn test_no_entry_points_fails() {
    let registry = registry_without_entry_points();

    let mut dispatcher = FilterChainDispatcher::new();
    assert_eq!(
        assemble(&registry, &mut dispatcher).unwrap_err(),
        SecurityConfigError::NoEntryPoints
    );
}
