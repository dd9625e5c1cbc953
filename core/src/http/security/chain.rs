//! Filter chains and the chain dispatcher's pattern map.
//!
//! The dispatcher selects, per request, the filter chain whose URL pattern
//! matches the request path. This crate only assembles the map the
//! dispatcher walks; the dispatch loop itself is an external collaborator.
//!
//! # Spring Security Equivalent
//! `FilterChainProxy` and its filter chain map

use indexmap::IndexMap;

use crate::http::security::ant_matcher::UrlMatcher;
use crate::http::security::filter::FilterRegistration;

/// The pattern every request matches. Exactly one chain is registered under
/// it after assembly.
pub const UNIVERSAL_MATCH_PATTERN: &str = "/**";

/// An ordered sequence of filters associated with a URL pattern.
/// Immutable once assembled.
#[derive(Debug, Clone)]
pub struct FilterChain {
    pattern: String,
    filters: Vec<FilterRegistration>,
}

impl FilterChain {
    pub fn new(pattern: &str, filters: Vec<FilterRegistration>) -> Self {
        FilterChain {
            pattern: pattern.to_string(),
            filters,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn filters(&self) -> &[FilterRegistration] {
        &self.filters
    }

    /// Filter identities in chain order. Handy for logging and assertions.
    pub fn filter_ids(&self) -> Vec<&str> {
        self.filters.iter().map(|reg| reg.id()).collect()
    }
}

/// Pattern to chain mapping, in insertion order. Lookup is first match
/// wins, so narrower patterns should be registered before the universal
/// one; the dispatcher falls back to the universal entry in any case.
#[derive(Debug, Clone, Default)]
pub struct FilterChainMap {
    chains: IndexMap<String, FilterChain>,
}

impl FilterChainMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for the chain's pattern.
    pub fn insert(&mut self, chain: FilterChain) {
        self.chains.insert(chain.pattern().to_string(), chain);
    }

    pub fn get(&self, pattern: &str) -> Option<&FilterChain> {
        self.chains.get(pattern)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    /// The chain for a request path: the first registered pattern that
    /// matches, with the universal pattern tried last.
    pub fn chain_for(&self, path: &str) -> Option<&FilterChain> {
        self.chains
            .iter()
            .filter(|(pattern, _)| pattern.as_str() != UNIVERSAL_MATCH_PATTERN)
            .map(|(_, chain)| chain)
            .find(|chain| UrlMatcher::new(chain.pattern()).matches(path))
            .or_else(|| self.chains.get(UNIVERSAL_MATCH_PATTERN))
    }
}

/// Owner of the pattern map at request time.
///
/// Reads hand out a defensive copy and the assembler writes the finished
/// map back in a single assignment, so the dispatcher never observes a
/// partially assembled map.
#[derive(Default)]
pub struct FilterChainDispatcher {
    chain_map: FilterChainMap,
}

impl FilterChainDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain_map(chain_map: FilterChainMap) -> Self {
        FilterChainDispatcher { chain_map }
    }

    pub fn universal_match_pattern(&self) -> &'static str {
        UNIVERSAL_MATCH_PATTERN
    }

    /// A copy of the current pattern map.
    pub fn chain_map(&self) -> FilterChainMap {
        self.chain_map.clone()
    }

    /// Replaces the pattern map wholesale.
    pub fn set_chain_map(&mut self, chain_map: FilterChainMap) {
        self.chain_map = chain_map;
    }

    pub fn chain_for(&self, path: &str) -> Option<&FilterChain> {
        self.chain_map.chain_for(path)
    }
}
