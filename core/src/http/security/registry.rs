//! The component registry handed to the assembler.
//!
//! The container that discovers components is an external collaborator;
//! what assembly needs from it is captured here as an explicit value passed
//! in at construction time, with typed accessors instead of ambient
//! "find the one bean of type X" lookups. Candidate maps preserve
//! registration order because several contracts depend on it: chain
//! ordering breaks ties by discovery sequence, and the remember-me wirer
//! uses the first-registered service.
//!
//! # Spring Security Equivalent
//! `ConfigurableListableBeanFactory`, as consumed by
//! `HttpSecurityConfigPostProcessor`

use std::sync::Arc;

use indexmap::IndexMap;

use crate::http::auth::method::InterceptMethodsDeclaration;
use crate::http::auth::target_index::TargetTypeIndex;
use crate::http::error::SecurityConfigError;
use crate::http::security::entry_point::AuthenticationEntryPoint;
use crate::http::security::filter::{FilterRegistration, SecurityFilter};
use crate::http::security::manager::{AccessDecisionManager, AuthenticationManager};
use crate::http::security::remember_me::RememberMeServices;

/// Result of a singleton lookup.
///
/// Never panics and never guesses: the caller decides whether zero or many
/// candidates is an error for its contract.
pub enum Lookup<T> {
    One(T),
    None,
    Ambiguous(usize),
}

impl<T> Lookup<T> {
    fn from_candidates(candidates: &IndexMap<String, T>) -> Lookup<T>
    where
        T: Clone,
    {
        match candidates.len() {
            0 => Lookup::None,
            1 => Lookup::One(candidates[0].clone()),
            n => Lookup::Ambiguous(n),
        }
    }

    /// Requires exactly one candidate for the named singleton role.
    pub fn require(self, role: &'static str) -> Result<T, SecurityConfigError> {
        match self {
            Lookup::One(value) => Ok(value),
            Lookup::None => Err(SecurityConfigError::ManagerMissing { role }),
            Lookup::Ambiguous(count) => Err(SecurityConfigError::ManagerAmbiguous { role, count }),
        }
    }
}

/// The unordered candidate sets assembly starts from.
#[derive(Default)]
pub struct SecurityRegistry {
    filters: Vec<FilterRegistration>,
    entry_points: IndexMap<String, Arc<dyn AuthenticationEntryPoint>>,
    remember_me_services: IndexMap<String, Arc<dyn RememberMeServices>>,
    authentication_managers: IndexMap<String, Arc<dyn AuthenticationManager>>,
    access_decision_managers: IndexMap<String, Arc<dyn AccessDecisionManager>>,
    method_declarations: Vec<InterceptMethodsDeclaration>,
    target_types: TargetTypeIndex,
}

impl SecurityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------

    pub fn register_filter(&mut self, id: &str, filter: Arc<dyn SecurityFilter>) {
        let sequence = self.filters.len();
        self.filters.push(FilterRegistration::new(id, sequence, filter));
    }

    pub fn register_entry_point(&mut self, id: &str, entry_point: Arc<dyn AuthenticationEntryPoint>) {
        self.entry_points.insert(id.to_string(), entry_point);
    }

    pub fn register_remember_me_services(&mut self, id: &str, services: Arc<dyn RememberMeServices>) {
        self.remember_me_services.insert(id.to_string(), services);
    }

    pub fn register_authentication_manager(&mut self, id: &str, manager: Arc<dyn AuthenticationManager>) {
        self.authentication_managers.insert(id.to_string(), manager);
    }

    pub fn register_access_decision_manager(&mut self, id: &str, manager: Arc<dyn AccessDecisionManager>) {
        self.access_decision_managers.insert(id.to_string(), manager);
    }

    pub fn register_method_declaration(&mut self, declaration: InterceptMethodsDeclaration) {
        self.method_declarations.push(declaration);
    }

    pub fn set_target_types(&mut self, index: TargetTypeIndex) {
        self.target_types = index;
    }

    // -------------------------------------------------------------------
    // Typed accessors
    // -------------------------------------------------------------------

    /// All registered filters, in registration order.
    pub fn filters(&self) -> &[FilterRegistration] {
        &self.filters
    }

    /// Looks up a filter registration by its well-known identity.
    pub fn filter_by_id(&self, id: &str) -> Option<&FilterRegistration> {
        self.filters.iter().find(|reg| reg.id() == id)
    }

    /// Entry point candidates, identity to instance.
    pub fn entry_points(&self) -> &IndexMap<String, Arc<dyn AuthenticationEntryPoint>> {
        &self.entry_points
    }

    /// The first-registered remember-me services, if any. More than one
    /// registered instance is not an error; remember-me is an enhancement,
    /// so the extras are simply ignored.
    pub fn first_remember_me_services(&self) -> Option<(&str, &Arc<dyn RememberMeServices>)> {
        self.remember_me_services
            .first()
            .map(|(id, services)| (id.as_str(), services))
    }

    pub fn remember_me_service_count(&self) -> usize {
        self.remember_me_services.len()
    }

    pub fn authentication_manager(&self) -> Lookup<Arc<dyn AuthenticationManager>> {
        Lookup::from_candidates(&self.authentication_managers)
    }

    pub fn access_decision_manager(&self) -> Lookup<Arc<dyn AccessDecisionManager>> {
        Lookup::from_candidates(&self.access_decision_managers)
    }

    /// Declarative method-protection declarations, in document order.
    pub fn method_declarations(&self) -> &[InterceptMethodsDeclaration] {
        &self.method_declarations
    }

    pub fn target_types(&self) -> &TargetTypeIndex {
        &self.target_types
    }
}
