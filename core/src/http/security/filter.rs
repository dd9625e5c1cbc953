//! The security filter model.
//!
//! A filter is opaque to the assembler: the per-request dispatch loop is
//! someone else's concern. What the assembler needs from each filter is its
//! declared chain position and its capability tags, and that is all the
//! [`SecurityFilter`] trait exposes.
//!
//! # Spring Security Equivalent
//! `javax.servlet.Filter` + `org.springframework.core.Ordered`

use std::sync::Arc;

/// Capability tags a filter may carry.
///
/// Capabilities drive cross-cutting assembly decisions; they say what a
/// filter *is*, not what it does per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCapability {
    /// The filter is the chain dispatcher itself and is excluded from
    /// chain ordering.
    ChainDispatcher,
    /// The filter processes authentication submissions and accepts an
    /// optional remember-me services reference.
    AuthenticationProcessing,
    /// The filter enforces concurrent session limits. Its presence forces
    /// eager session creation on the session context integration filter.
    ConcurrentSessionControl,
}

/// A unit of the request-processing chain, seen from the assembler's side.
///
/// # Spring Security Equivalent
/// A filter bean; `declared_order` stands in for implementing `Ordered`.
pub trait SecurityFilter: Send + Sync {
    /// The filter's declared position in the chain, ascending. `None`
    /// means the filter does not declare one, which fails assembly for
    /// every filter except the chain dispatcher.
    fn declared_order(&self) -> Option<i32> {
        None
    }

    /// Capability tags carried by this filter.
    fn capabilities(&self) -> &[FilterCapability] {
        &[]
    }

    fn has_capability(&self, capability: FilterCapability) -> bool {
        self.capabilities().contains(&capability)
    }
}

/// A filter as registered: identity, discovery sequence and instance.
///
/// The sequence number is assigned by the registry in registration order
/// and breaks ties between equal declared orders, so the assembled chain is
/// a total order even with duplicate priorities.
#[derive(Clone)]
pub struct FilterRegistration {
    id: String,
    sequence: usize,
    filter: Arc<dyn SecurityFilter>,
}

impl std::fmt::Debug for FilterRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistration")
            .field("id", &self.id)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl FilterRegistration {
    pub fn new(id: &str, sequence: usize, filter: Arc<dyn SecurityFilter>) -> Self {
        FilterRegistration {
            id: id.to_string(),
            sequence,
            filter,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn filter(&self) -> &Arc<dyn SecurityFilter> {
        &self.filter
    }

    pub fn declared_order(&self) -> Option<i32> {
        self.filter.declared_order()
    }

    pub fn has_capability(&self, capability: FilterCapability) -> bool {
        self.filter.has_capability(capability)
    }
}
