//! End-to-end assembly: a full registry through `assemble`.

use std::sync::Arc;

use actix_bastion_core::http::auth::{
    InterceptMethodsDeclaration, ProtectedMethod, TargetType, TargetTypeIndex,
};
use actix_bastion_core::http::security::{
    assemble, ids, AccessDecisionManager, AuthenticationManager, FilterCapability,
    FilterChainDispatcher, FormLoginEntryPoint, RememberMeConfig, SecurityRegistry,
    TokenBasedRememberMeServices, UNIVERSAL_MATCH_PATTERN,
};

use actix_bastion_test::{DenyAuthenticationManager, PermitAllDecisionManager, StubFilter};

#[test]
fn test_full_assembly() {
    let mut registry = SecurityRegistry::new();

    // Filters, deliberately registered out of order.
    registry.register_filter(
        ids::SESSION_CONTEXT_INTEGRATION_FILTER,
        Arc::new(StubFilter::ordered(100)),
    );
    registry.register_filter(
        "concurrentSessionFilter",
        Arc::new(StubFilter::ordered(50).with_capability(FilterCapability::ConcurrentSessionControl)),
    );
    registry.register_filter(
        "formLoginFilter",
        Arc::new(StubFilter::ordered(300).with_capability(FilterCapability::AuthenticationProcessing)),
    );
    registry.register_filter(ids::EXCEPTION_TRANSLATION_FILTER, Arc::new(StubFilter::ordered(200)));
    registry.register_filter(
        ids::FILTER_CHAIN_DISPATCHER,
        Arc::new(StubFilter::unordered().with_capability(FilterCapability::ChainDispatcher)),
    );

    // Entry points.
    registry.register_entry_point(
        ids::FORM_LOGIN_ENTRY_POINT,
        Arc::new(FormLoginEntryPoint::new("/login")),
    );

    // Remember-me.
    let remember_me = Arc::new(TokenBasedRememberMeServices::new(
        RememberMeConfig::new("key").cookie_secure(false),
    ));
    registry.register_remember_me_services("rememberMeServices", remember_me);

    // Managers.
    let auth_manager: Arc<dyn AuthenticationManager> = Arc::new(DenyAuthenticationManager);
    let decision_manager: Arc<dyn AccessDecisionManager> = Arc::new(PermitAllDecisionManager);
    registry.register_authentication_manager("authenticationManager", Arc::clone(&auth_manager));
    registry.register_access_decision_manager("accessDecisionManager", Arc::clone(&decision_manager));

    // Method security.
    registry.set_target_types(
        TargetTypeIndex::new().with_type(TargetType::new("BankService", &["getBalance", "setBalance"])),
    );
    registry.register_method_declaration(InterceptMethodsDeclaration::new(
        "BankService",
        vec![ProtectedMethod::new("get*", "ROLE_SUPERVISOR,ROLE_TELLER")],
    ));

    let mut dispatcher = FilterChainDispatcher::new();
    let assembly = assemble(&registry, &mut dispatcher).unwrap();

    // Chain: sorted, dispatcher excluded, installed under the universal
    // pattern and visible through the dispatcher.
    let chain = assembly.filter_chains.get(UNIVERSAL_MATCH_PATTERN).unwrap();
    assert_eq!(
        chain.filter_ids(),
        vec![
            "concurrentSessionFilter",
            ids::SESSION_CONTEXT_INTEGRATION_FILTER,
            ids::EXCEPTION_TRANSLATION_FILTER,
            "formLoginFilter",
        ]
    );
    assert_eq!(
        dispatcher.chain_for("/anything").unwrap().filter_ids(),
        chain.filter_ids()
    );

    // Concurrent session control forces eager session creation.
    assert!(assembly.session_integration.force_eager_session_creation());

    // Entry point resolved through the reserved identity.
    assert_eq!(
        assembly.exception_translation.entry_point_id(),
        ids::FORM_LOGIN_ENTRY_POINT
    );

    // Remember-me reached the authentication-processing filter.
    assert_eq!(assembly.authentication_filters.len(), 1);
    assert_eq!(assembly.authentication_filters[0].id(), "formLoginFilter");
    assert!(assembly.authentication_filters[0].remember_me_services().is_some());

    // Method security: one configured interceptor with the shared managers.
    assert_eq!(assembly.method_interceptors.len(), 1);
    let interceptor = &assembly.method_interceptors[0];
    assert!(Arc::ptr_eq(interceptor.authentication_manager(), &auth_manager));
    assert!(Arc::ptr_eq(interceptor.access_decision_manager(), &decision_manager));

    let attrs = interceptor.rules().attributes_for("getBalance").unwrap();
    let names: Vec<&str> = attrs.iter().map(|a| a.attribute()).collect();
    assert_eq!(names, vec!["ROLE_SUPERVISOR", "ROLE_TELLER"]);
    assert!(interceptor.rules().attributes_for("setBalance").is_none());
}
