//! Index of known secured target types.
//!
//! Declarative rules name their target type by string. Resolution runs
//! against this pre-built index and returns a typed found/not-found result;
//! there is no runtime reflection and no exception-driven control flow.

use indexmap::IndexMap;

/// A known target type: its name and declared method names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetType {
    name: String,
    methods: Vec<String>,
}

impl TargetType {
    pub fn new(name: &str, methods: &[&str]) -> Self {
        TargetType {
            name: name.to_string(),
            methods: methods.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }
}

/// All target types the rule compiler may resolve against.
#[derive(Debug, Clone, Default)]
pub struct TargetTypeIndex {
    types: IndexMap<String, TargetType>,
}

impl TargetTypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, target: TargetType) -> Self {
        self.types.insert(target.name.clone(), target);
        self
    }

    pub fn register(&mut self, target: TargetType) {
        self.types.insert(target.name.clone(), target);
    }

    /// Resolves a target type by name.
    pub fn resolve(&self, name: &str) -> Option<&TargetType> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
