//! Compiler Configuration
//!
//! Alias, namespace and anonymous component registrations, plus the
//! host vocabulary the emitter writes into generated directives.
//! Registration order is observable: resolution walks paths and
//! namespaces in the order they were registered.

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_NAMESPACE: &str = "App\\";
pub const DEFAULT_ANONYMOUS_COMPONENT_TYPE: &str = "Illuminate\\View\\AnonymousComponent";
pub const DEFAULT_DYNAMIC_COMPONENT_TYPE: &str = "Illuminate\\View\\DynamicComponent";
pub const DEFAULT_ATTRIBUTE_BAG_TYPE: &str = "Illuminate\\View\\ComponentAttributeBag";
pub const DEFAULT_SANITIZER: &str = "\\Illuminate\\View\\Compilers\\BladeCompiler::sanitizeComponentAttribute";
pub const DEFAULT_CLASS_HELPER: &str = "\\Illuminate\\Support\\Arr::toCssClasses";
pub const DEFAULT_STYLE_HELPER: &str = "\\Illuminate\\Support\\Arr::toCssStyles";

/// A directory registered for anonymous (view-only) components.
///
/// Views below `path` are addressable as `<prefix_hash>::<name>`; the
/// hash is computed by whoever registers the path with the view
/// finder, so it is supplied here as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymousComponentPath {
    pub path: String,
    #[serde(default)]
    pub prefix: Option<String>,
    pub prefix_hash: String,
}

impl AnonymousComponentPath {
    pub fn new(path: impl Into<String>, prefix: Option<&str>, prefix_hash: impl Into<String>) -> Self {
        AnonymousComponentPath {
            path: path.into(),
            prefix: prefix.map(str::to_string),
            prefix_hash: prefix_hash.into(),
        }
    }

    /// The registered prefix, or empty when the path has none
    pub fn prefix_str(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerConfig {
    /// Tag name -> type or view identifier
    pub aliases: IndexMap<String, String>,
    /// Tag prefix (before `::`) -> type namespace
    pub namespaces: IndexMap<String, String>,
    pub anonymous_component_paths: Vec<AnonymousComponentPath>,
    /// Tag prefix (before `::`) -> view directory
    pub anonymous_component_namespaces: IndexMap<String, String>,
    /// Root namespace for convention-based type guesses, with trailing separator
    pub app_namespace: String,
    pub anonymous_component_type: String,
    pub dynamic_component_type: String,
    pub attribute_bag_type: String,
    pub sanitizer: String,
    pub class_helper: String,
    pub style_helper: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            aliases: IndexMap::new(),
            namespaces: IndexMap::new(),
            anonymous_component_paths: Vec::new(),
            anonymous_component_namespaces: IndexMap::new(),
            app_namespace: DEFAULT_APP_NAMESPACE.to_string(),
            anonymous_component_type: DEFAULT_ANONYMOUS_COMPONENT_TYPE.to_string(),
            dynamic_component_type: DEFAULT_DYNAMIC_COMPONENT_TYPE.to_string(),
            attribute_bag_type: DEFAULT_ATTRIBUTE_BAG_TYPE.to_string(),
            sanitizer: DEFAULT_SANITIZER.to_string(),
            class_helper: DEFAULT_CLASS_HELPER.to_string(),
            style_helper: DEFAULT_STYLE_HELPER.to_string(),
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration document. Missing keys take their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(name.into(), target.into());
        self
    }

    pub fn with_namespace(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.namespaces.insert(prefix.into(), namespace.into());
        self
    }

    pub fn with_anonymous_path(mut self, path: AnonymousComponentPath) -> Self {
        self.anonymous_component_paths.push(path);
        self
    }

    pub fn with_anonymous_namespace(
        mut self,
        prefix: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        self.anonymous_component_namespaces
            .insert(prefix.into(), directory.into());
        self
    }

    pub fn with_app_namespace(mut self, namespace: impl Into<String>) -> Self {
        let mut namespace = namespace.into();
        if !namespace.is_empty() && !namespace.ends_with('\\') {
            namespace.push('\\');
        }
        self.app_namespace = namespace;
        self
    }
}
