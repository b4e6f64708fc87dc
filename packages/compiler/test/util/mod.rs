#![allow(dead_code)]
#![allow(unused_imports)]

/*
 * Compiler Test Utilities
 *
 * Fake type registry and view finder plus helpers to build a compiler
 * over them and to render the expected directive text.
 */

use component_tag_compiler::config::DEFAULT_SANITIZER;
use component_tag_compiler::{
    CompilerConfig, ComponentTagCompiler, Segment, StaticTypeRegistry, StaticViewFinder, TagKind,
};

/// Types and views known to a test compiler
pub struct Fixture {
    pub config: CompilerConfig,
    pub types: StaticTypeRegistry,
    pub views: StaticViewFinder,
}

impl Fixture {
    pub fn new() -> Self {
        Fixture {
            config: CompilerConfig::default(),
            types: StaticTypeRegistry::new(),
            views: StaticViewFinder::new(),
        }
    }

    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_type(mut self, type_name: &str, parameters: &[&str]) -> Self {
        self.types = self.types.with_type(type_name, parameters.iter().copied());
        self
    }

    pub fn with_constructorless_type(mut self, type_name: &str) -> Self {
        self.types = self.types.with_constructorless_type(type_name);
        self
    }

    pub fn with_view(mut self, view: &str) -> Self {
        self.views = self.views.with_view(view);
        self
    }

    pub fn compiler(&self) -> ComponentTagCompiler<'_> {
        ComponentTagCompiler::new(self.config.clone(), &self.types, &self.views)
    }

    pub fn compile(&self, source: &str) -> String {
        self.compiler().compile(source).unwrap()
    }
}

/// Sanitizer call around a bound value, as the default config emits it
pub fn sanitized(value: &str) -> String {
    format!("{}({})", DEFAULT_SANITIZER, value)
}

/// Expected opening directive for a typed component with the default
/// vocabulary
pub fn component_open(class: &str, tag: &str, data: &str, attributes: &str) -> String {
    format!(
        "##BEGIN-COMPONENT-CLASS##@component('{class}', '{tag}', [{data}])
<?php if (isset($attributes) && $attributes instanceof Illuminate\\View\\ComponentAttributeBag && $constructor = (new ReflectionClass({class}::class))->getConstructor()): ?>
<?php $attributes = $attributes->except(\\Illuminate\\Support\\collect($constructor->getParameters())->map->getName()->all()); ?>
<?php endif; ?>
<?php $component->withAttributes([{attributes}]); ?>"
    )
}

/// Expected opening directive for a view-backed component
pub fn anonymous_open(view: &str, tag: &str, data: &str, attributes: &str) -> String {
    component_open(
        "Illuminate\\View\\AnonymousComponent",
        tag,
        &format!("'view' => '{}','data' => [{}]", view, data),
        attributes,
    )
}

pub const SELF_CLOSING_SUFFIX: &str = "\n@endComponentClass##END-COMPONENT-CLASS##";
pub const COMPONENT_CLOSE: &str = " @endComponentClass##END-COMPONENT-CLASS##";
pub const SLOT_CLOSE: &str = " @endslot";

/// `[kind, name, attributes]` for every tag in `source`
pub fn humanize_tags(source: &str) -> Vec<(TagKind, String, String)> {
    component_tag_compiler::scan(source)
        .iter()
        .filter_map(Segment::as_tag)
        .map(|tag| (tag.kind, tag.name.to_string(), tag.attributes.to_string()))
        .collect()
}
