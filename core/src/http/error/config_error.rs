//! Security configuration errors.
//!
//! Every failure during startup assembly is a value of
//! [`SecurityConfigError`]. All of them are fatal: serving traffic with a
//! malformed or ambiguous security chain is unacceptable, so none of these
//! are ever caught and downgraded to a warning.

use derive_more::{Display, Error};

/// A defect detected while assembling the security configuration.
///
/// # Spring Security Equivalent
/// `SecurityConfigurationException`
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum SecurityConfigError {
    /// A registered filter does not declare its position in the chain.
    #[display("filter '{id}' must declare a chain order")]
    FilterOrderMissing { id: String },

    /// No filters registered besides the chain dispatcher.
    #[display("no security filters registered")]
    NoFiltersRegistered,

    /// No authentication entry point candidates at all.
    #[display("no authentication entry point instances defined")]
    NoEntryPoints,

    /// No candidate carries the reserved form-login identity.
    #[display("failed to resolve the authentication entry point")]
    EntryPointUnresolved,

    /// A concurrent-session filter is registered but the session context
    /// integration filter it depends on is not.
    #[display(
        "concurrent session control requires the session context integration filter '{expected_id}'"
    )]
    SessionIntegrationMissing { expected_id: String },

    /// A declarative rule names a target type missing from the index.
    #[display("target type '{name}' not found")]
    TargetTypeNotFound { name: String },

    /// A declarative rule protects a method its target type does not declare.
    #[display("method '{method}' is not declared by target type '{type_name}'")]
    ProtectedMethodUnknown { type_name: String, method: String },

    /// A required manager singleton is absent.
    #[display("no {role} registered")]
    ManagerMissing { role: &'static str },

    /// More than one candidate for a manager singleton.
    #[display("required a single {role} but found {count}")]
    ManagerAmbiguous { role: &'static str, count: usize },
}
