//! Type Registry
//!
//! Answers "does this type exist" and "what are its constructor's
//! parameter names". Both queries are synchronous and side-effect
//! free; "not found" is an ordinary answer, not a failure.

use indexmap::{IndexMap, IndexSet};

/// Ordered constructor parameter names of a component type
pub type ParameterNameSet = IndexSet<String>;

/// Reflection-like view of the host's component types
pub trait TypeRegistry {
    /// Check if a type with the fully-qualified identifier exists
    fn type_exists(&self, type_name: &str) -> bool;

    /// Constructor parameter names, or `None` when the type has no
    /// constructor (or does not exist)
    fn constructor_parameters(&self, type_name: &str) -> Option<ParameterNameSet>;
}

/// A fixed set of known types
#[derive(Debug, Clone, Default)]
pub struct StaticTypeRegistry {
    types: IndexMap<String, Option<ParameterNameSet>>,
}

impl StaticTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type whose constructor takes `parameters`
    pub fn with_type<I, S>(mut self, type_name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parameters = parameters.into_iter().map(Into::into).collect();
        self.types.insert(type_name.into(), Some(parameters));
        self
    }

    /// Register a type that has no constructor
    pub fn with_constructorless_type(mut self, type_name: impl Into<String>) -> Self {
        self.types.insert(type_name.into(), None);
        self
    }
}

impl TypeRegistry for StaticTypeRegistry {
    fn type_exists(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    fn constructor_parameters(&self, type_name: &str) -> Option<ParameterNameSet> {
        self.types.get(type_name).cloned().flatten()
    }
}
