//! Method security rules, the declaration compiler and the interceptor.
//!
//! A declaration attaches (method pattern, access expression) pairs to a
//! target type. Compilation resolves the target type against the index,
//! parses each access expression and accumulates the rules in document
//! order: first-match-wins at evaluation time belongs to the consumer of
//! the table, so the table's only job is to preserve that order exactly.
//!
//! # Spring Security Equivalent
//! `MethodDefinitionMap`, `MethodSecurityInterceptor` and the
//! `intercept-methods` bean definition decorator

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::http::auth::access::{parse_attribute_list, ConfigAttribute};
use crate::http::auth::target_index::TargetTypeIndex;
use crate::http::error::SecurityConfigError;
use crate::http::security::manager::{AccessDecisionManager, AuthenticationManager};
use crate::http::security::registry::SecurityRegistry;

// =============================================================================
// Declarative Input
// =============================================================================

/// One (method pattern, access expression text) pair from a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedMethod {
    pub method: String,
    pub access: String,
}

impl ProtectedMethod {
    pub fn new(method: &str, access: &str) -> Self {
        ProtectedMethod {
            method: method.to_string(),
            access: access.to_string(),
        }
    }
}

/// A target-type declaration with its protected methods, document order
/// significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptMethodsDeclaration {
    pub target_type: String,
    pub methods: Vec<ProtectedMethod>,
}

impl InterceptMethodsDeclaration {
    pub fn new(target_type: &str, methods: Vec<ProtectedMethod>) -> Self {
        InterceptMethodsDeclaration {
            target_type: target_type.to_string(),
            methods,
        }
    }
}

// =============================================================================
// Rule Table
// =============================================================================

/// A method-name pattern. `*` matches any run of characters, `?` exactly
/// one; anything else is literal.
#[derive(Debug, Clone)]
pub struct MethodPattern {
    pattern: String,
    regex_source: String,
}

impl MethodPattern {
    pub fn new(pattern: &str) -> Self {
        let mut source = String::from("^");
        for c in pattern.chars() {
            match c {
                '*' => source.push_str(".*"),
                '?' => source.push('.'),
                c => source.push_str(&regex::escape(&c.to_string())),
            }
        }
        source.push('$');

        MethodPattern {
            pattern: pattern.to_string(),
            regex_source: source,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern contains wildcards at all.
    pub fn is_literal(&self) -> bool {
        !self.pattern.contains('*') && !self.pattern.contains('?')
    }

    pub fn matches(&self, method: &str) -> bool {
        if let Ok(re) = Regex::new(&self.regex_source) {
            re.is_match(method)
        } else {
            false
        }
    }
}

/// A method pattern with its required access attributes.
#[derive(Debug, Clone)]
pub struct MethodSecurityRule {
    pattern: MethodPattern,
    attributes: Vec<ConfigAttribute>,
}

impl MethodSecurityRule {
    pub fn pattern(&self) -> &MethodPattern {
        &self.pattern
    }

    pub fn attributes(&self) -> &[ConfigAttribute] {
        &self.attributes
    }
}

/// Ordered rule table. Registration order is an invariant: consumers
/// evaluate first-registered-first-matched.
#[derive(Debug, Clone, Default)]
pub struct MethodRuleTable {
    rules: Vec<MethodSecurityRule>,
}

impl MethodRuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, pattern: &str, attributes: Vec<ConfigAttribute>) {
        self.rules.push(MethodSecurityRule {
            pattern: MethodPattern::new(pattern),
            attributes,
        });
    }

    pub fn rules(&self) -> &[MethodSecurityRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Attributes for a method name: the first rule whose pattern matches.
    pub fn attributes_for(&self, method: &str) -> Option<&[ConfigAttribute]> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(method))
            .map(|rule| rule.attributes.as_slice())
    }
}

// =============================================================================
// Compiler
// =============================================================================

/// A compiled declaration: the rule table bound to its target type, not
/// yet configured with managers.
#[derive(Debug, Clone)]
pub struct MethodDefinitionSource {
    target_type: String,
    rules: MethodRuleTable,
}

impl MethodDefinitionSource {
    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    pub fn rules(&self) -> &MethodRuleTable {
        &self.rules
    }
}

/// Compiles a declaration against the target type index.
///
/// The target type must exist; literal method names must be declared by
/// it. Wildcard patterns are taken as-is since they bind at match time.
pub fn compile_declaration(
    declaration: &InterceptMethodsDeclaration,
    index: &TargetTypeIndex,
) -> Result<MethodDefinitionSource, SecurityConfigError> {
    let target = index
        .resolve(&declaration.target_type)
        .ok_or_else(|| SecurityConfigError::TargetTypeNotFound {
            name: declaration.target_type.clone(),
        })?;

    let mut rules = MethodRuleTable::new();

    for protected in &declaration.methods {
        let pattern = MethodPattern::new(&protected.method);

        if pattern.is_literal() && !target.has_method(&protected.method) {
            return Err(SecurityConfigError::ProtectedMethodUnknown {
                type_name: declaration.target_type.clone(),
                method: protected.method.clone(),
            });
        }

        let attributes = parse_attribute_list(&protected.access);
        debug!(
            target_type = %declaration.target_type,
            method = %protected.method,
            "adding method security rule"
        );
        rules.add_rule(&protected.method, attributes);
    }

    Ok(MethodDefinitionSource {
        target_type: declaration.target_type.clone(),
        rules,
    })
}

// =============================================================================
// Interceptor
// =============================================================================

/// A fully configured method security interceptor: the rule table plus the
/// managers it consults at invocation time. Immutable once built; the
/// access decisions themselves happen outside this crate.
pub struct MethodSecurityInterceptor {
    target_type: String,
    rules: MethodRuleTable,
    authentication_manager: Arc<dyn AuthenticationManager>,
    access_decision_manager: Arc<dyn AccessDecisionManager>,
}

impl std::fmt::Debug for MethodSecurityInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodSecurityInterceptor")
            .field("target_type", &self.target_type)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl MethodSecurityInterceptor {
    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    pub fn rules(&self) -> &MethodRuleTable {
        &self.rules
    }

    pub fn authentication_manager(&self) -> &Arc<dyn AuthenticationManager> {
        &self.authentication_manager
    }

    pub fn access_decision_manager(&self) -> &Arc<dyn AccessDecisionManager> {
        &self.access_decision_manager
    }
}

/// The shared configuration routine: attaches the manager singletons to a
/// compiled definition source. Every interceptor goes through here no
/// matter which path created it, so all of them end up with the same
/// cross-cutting configuration.
pub fn configure_security_interceptor(
    registry: &SecurityRegistry,
    source: MethodDefinitionSource,
) -> Result<MethodSecurityInterceptor, SecurityConfigError> {
    let authentication_manager = registry
        .authentication_manager()
        .require("authentication manager")?;
    let access_decision_manager = registry
        .access_decision_manager()
        .require("access decision manager")?;

    Ok(MethodSecurityInterceptor {
        target_type: source.target_type,
        rules: source.rules,
        authentication_manager,
        access_decision_manager,
    })
}
