//! Component Resolver
//!
//! Maps a tag name to the type or view that implements it. Strategies
//! are tried in a fixed order and the first hit wins:
//!
//! 1. registered alias (authoritative, never falls through)
//! 2. `prefix::name` under a registered type namespace
//! 3. conventional type under `<app>\View\Components\`
//! 4. anonymous view below a registered path
//! 5. anonymous view in a registered namespace, then `components`
//! 6. `mail::` names used as raw view names
//!
//! Anything else is an error.

use crate::config::{AnonymousComponentPath, CompilerConfig};
use crate::error::{CompileError, Result};
use crate::schema::{TypeRegistry, ViewFinder};
use crate::util::{camel_case, split_hint, str_after, upper_first, HINT_PATH_DELIMITER, NAMESPACE_SEPARATOR};
use serde::Serialize;

const COMPONENTS_NAMESPACE: &str = "View\\Components\\";
const DEFAULT_VIEW_DIRECTORY: &str = "components";
const INDEX_VIEW: &str = ".index";
const RAW_VIEW_PREFIX: &str = "mail::";

/// What a tag name resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResolvedTarget {
    /// Fully-qualified component type
    TypedComponent(String),
    /// View rendered through the anonymous component type
    ViewComponent(String),
    /// View name passed through to the view factory as-is
    RawView(String),
}

impl ResolvedTarget {
    pub fn is_typed(&self) -> bool {
        matches!(self, ResolvedTarget::TypedComponent(_))
    }

    /// The type identifier or view name
    pub fn identifier(&self) -> &str {
        match self {
            ResolvedTarget::TypedComponent(name)
            | ResolvedTarget::ViewComponent(name)
            | ResolvedTarget::RawView(name) => name,
        }
    }
}

pub struct ComponentResolver<'a> {
    config: &'a CompilerConfig,
    types: &'a dyn TypeRegistry,
    views: &'a dyn ViewFinder,
}

impl<'a> ComponentResolver<'a> {
    pub fn new(config: &'a CompilerConfig, types: &'a dyn TypeRegistry, views: &'a dyn ViewFinder) -> Self {
        ComponentResolver { config, types, views }
    }

    /// Resolve a tag name (without the `x-` prefix)
    pub fn resolve(&self, component: &str) -> Result<ResolvedTarget> {
        match self.try_resolve(component) {
            Ok(target) => Ok(target),
            Err(err) => {
                log::warn!("{}", err);
                Err(err)
            }
        }
    }

    fn try_resolve(&self, component: &str) -> Result<ResolvedTarget> {
        if let Some(alias) = self.config.aliases.get(component) {
            return self.resolve_alias(component, alias);
        }

        if let Some(class) = self.find_class_by_component(component) {
            log::debug!("resolved `{}` through its namespace to {}", component, class);
            return Ok(ResolvedTarget::TypedComponent(class));
        }

        let class = self.guess_class_name(component);
        if self.types.type_exists(&class) {
            log::debug!("resolved `{}` by convention to {}", component, class);
            return Ok(ResolvedTarget::TypedComponent(class));
        }

        if let Some(view) = self.guess_anonymous_component_using_paths(component) {
            log::debug!("resolved `{}` to anonymous view {}", component, view);
            return Ok(ResolvedTarget::ViewComponent(view));
        }

        if let Some(view) = self.guess_anonymous_component_using_namespaces(component) {
            log::debug!("resolved `{}` to anonymous view {}", component, view);
            return Ok(ResolvedTarget::ViewComponent(view));
        }

        if component.starts_with(RAW_VIEW_PREFIX) {
            log::debug!("using `{}` as a raw view", component);
            return Ok(ResolvedTarget::RawView(component.to_string()));
        }

        Err(CompileError::UnresolvedComponent {
            component: component.to_string(),
            location: None,
        })
    }

    fn resolve_alias(&self, component: &str, alias: &str) -> Result<ResolvedTarget> {
        if self.types.type_exists(alias) {
            log::debug!("resolved `{}` through alias to type {}", component, alias);
            return Ok(ResolvedTarget::TypedComponent(alias.to_string()));
        }
        if self.views.exists(alias) {
            log::debug!("resolved `{}` through alias to view {}", component, alias);
            return Ok(ResolvedTarget::ViewComponent(alias.to_string()));
        }
        Err(CompileError::UnresolvedAlias {
            alias: alias.to_string(),
            component: component.to_string(),
            location: None,
        })
    }

    /// `prefix::name` where `prefix` is a registered type namespace.
    /// Only the segment right after the first `::` names the type.
    pub fn find_class_by_component(&self, component: &str) -> Option<String> {
        let (prefix, rest) = split_hint(component)?;
        let name = rest.split(HINT_PATH_DELIMITER).next().unwrap_or(rest);
        let namespace = self.config.namespaces.get(prefix)?;
        let class = format!(
            "{}{}{}",
            namespace.trim_end_matches(NAMESPACE_SEPARATOR),
            NAMESPACE_SEPARATOR,
            format_class_name(name)
        );
        self.types.type_exists(&class).then_some(class)
    }

    /// Conventional type identifier for a tag name, whether or not it exists
    pub fn guess_class_name(&self, component: &str) -> String {
        let app = self.config.app_namespace.trim_end_matches(NAMESPACE_SEPARATOR);
        let mut class = String::new();
        if !app.is_empty() {
            class.push_str(app);
            class.push(NAMESPACE_SEPARATOR);
        }
        class.push_str(COMPONENTS_NAMESPACE);
        class.push_str(&format_class_name(component));
        class
    }

    fn guess_anonymous_component_using_paths(&self, component: &str) -> Option<String> {
        self.config
            .anonymous_component_paths
            .iter()
            .find_map(|path| self.guess_in_path(path, component))
    }

    fn guess_in_path(&self, path: &AnonymousComponentPath, component: &str) -> Option<String> {
        let prefixed = format!("{}{}", path.prefix_str(), HINT_PATH_DELIMITER);
        let has_prefix = component.starts_with(&prefixed);
        if component.contains(HINT_PATH_DELIMITER) && !has_prefix {
            return None;
        }

        let name = if has_prefix {
            str_after(component, HINT_PATH_DELIMITER)
        } else {
            component
        };

        let view = format!("{}{}{}", path.prefix_hash, HINT_PATH_DELIMITER, name);
        self.first_existing_view(view)
    }

    fn guess_anonymous_component_using_namespaces(&self, component: &str) -> Option<String> {
        let registered = self
            .config
            .anonymous_component_namespaces
            .iter()
            .filter_map(|(prefix, directory)| {
                let prefixed = format!("{}{}", prefix, HINT_PATH_DELIMITER);
                component
                    .starts_with(&prefixed)
                    .then(|| (str_after(component, &prefixed), directory.as_str()))
            });

        registered
            .chain(std::iter::once((component, DEFAULT_VIEW_DIRECTORY)))
            .find_map(|(name, directory)| self.first_existing_view(guess_view_name(name, directory)))
    }

    /// `view`, or else `view.index`, if either exists
    fn first_existing_view(&self, view: String) -> Option<String> {
        if self.views.exists(&view) {
            return Some(view);
        }
        let index = view + INDEX_VIEW;
        self.views.exists(&index).then_some(index)
    }
}

/// `alert.danger-zone` -> `Alert\DangerZone`
pub fn format_class_name(component: &str) -> String {
    let mut class = String::with_capacity(component.len());
    for (index, section) in component.split('.').enumerate() {
        if index > 0 {
            class.push(NAMESPACE_SEPARATOR);
        }
        class.push_str(&upper_first(&camel_case(section)));
    }
    class
}

/// View name for `name` inside the `prefix` directory. A hinted name
/// (`package::name`) keeps its hint and places the directory after it.
pub fn guess_view_name(name: &str, prefix: &str) -> String {
    let mut prefix = prefix.to_string();
    if !prefix.ends_with('.') {
        prefix.push('.');
    }

    match name.split_once(HINT_PATH_DELIMITER) {
        Some((hint, rest)) => format!("{}{}{}{}", hint, HINT_PATH_DELIMITER, prefix, rest),
        None => format!("{}{}", prefix, name),
    }
}
