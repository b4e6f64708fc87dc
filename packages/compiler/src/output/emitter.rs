//! Directive Emitter
//!
//! Renders the directive text that replaces component and slot tags.
//! Everything the generated code names on the host side (component
//! types, the attribute bag, the sanitizer) comes from the config.

use crate::component::ResolvedTarget;
use crate::config::CompilerConfig;
use crate::template_parser::{AttributeList, BoundAttributeMarks};
use crate::util::is_numeric;

pub const BEGIN_COMPONENT_MARKER: &str = "##BEGIN-COMPONENT-CLASS##";
pub const END_COMPONENT_MARKER: &str = "##END-COMPONENT-CLASS##";
const END_COMPONENT_DIRECTIVE: &str = "@endComponentClass";
const END_SLOT_DIRECTIVE: &str = "@endslot";
const RAW_VIEW_FACTORY: &str = "$__env->getContainer()->make(Illuminate\\View\\Factory::class)";

pub struct DirectiveEmitter<'c> {
    config: &'c CompilerConfig,
}

impl<'c> DirectiveEmitter<'c> {
    pub fn new(config: &'c CompilerConfig) -> Self {
        DirectiveEmitter { config }
    }

    /// Opening directive of a component tag.
    ///
    /// `data` must already carry camel-cased keys. `bound` marks the
    /// attributes whose values are expressions; those are sanitized in
    /// the attribute assignment unless the target is the dynamic
    /// component.
    pub fn component_open(
        &self,
        target: &ResolvedTarget,
        component: &str,
        data: &AttributeList,
        attributes: &AttributeList,
        bound: &BoundAttributeMarks,
    ) -> String {
        let data = self.attributes_to_string(data, None);
        let (class, parameters) = match target {
            ResolvedTarget::TypedComponent(class) => (class.as_str(), data),
            ResolvedTarget::ViewComponent(view) => (
                self.config.anonymous_component_type.as_str(),
                view_parameters(&format!("'{}'", view), &data),
            ),
            ResolvedTarget::RawView(view) => (
                self.config.anonymous_component_type.as_str(),
                view_parameters(&format!("{}->make('{}')", RAW_VIEW_FACTORY, view), &data),
            ),
        };

        let sanitize = class != self.config.dynamic_component_type;
        let attributes = self.attributes_to_string(attributes, sanitize.then_some(bound));

        let mut output = String::new();
        output.push_str(&format!(
            "{}@component('{}', '{}', [{}])",
            BEGIN_COMPONENT_MARKER, class, component, parameters
        ));
        output.push_str(&format!(
            "\n<?php if (isset($attributes) && $attributes instanceof {} && $constructor = (new ReflectionClass({}::class))->getConstructor()): ?>",
            self.config.attribute_bag_type, class
        ));
        output.push_str(
            "\n<?php $attributes = $attributes->except(\\Illuminate\\Support\\collect($constructor->getParameters())->map->getName()->all()); ?>",
        );
        output.push_str("\n<?php endif; ?>");
        output.push_str(&format!("\n<?php $component->withAttributes([{}]); ?>", attributes));
        output
    }

    /// Appended right after the opening directive of `<x-name/>`
    pub fn self_closing_suffix(&self) -> String {
        format!("\n{}", self.component_close_marker())
    }

    /// Replacement for `</x-name>`
    pub fn component_close(&self) -> String {
        format!(" {}", self.component_close_marker())
    }

    fn component_close_marker(&self) -> String {
        format!("{}{}", END_COMPONENT_DIRECTIVE, END_COMPONENT_MARKER)
    }

    /// Replacement for `<x-slot ...>`; `name` is a host expression
    pub fn slot_open(&self, name: &str, attributes: &AttributeList, bound: &BoundAttributeMarks) -> String {
        format!(
            " @slot({}, null, [{}]) ",
            name,
            self.attributes_to_string(attributes, Some(bound))
        )
    }

    /// Replacement for `</x-slot>`
    pub fn slot_close(&self) -> String {
        format!(" {}", END_SLOT_DIRECTIVE)
    }

    /// Render `'name' => value` pairs joined with `,`. When `bound` is
    /// given, bound values other than `true` and numbers are wrapped in
    /// the sanitizer.
    pub fn attributes_to_string(&self, attributes: &AttributeList, bound: Option<&BoundAttributeMarks>) -> String {
        attributes
            .iter()
            .map(|attribute| {
                let sanitize = bound.is_some_and(|bound| bound.contains(&attribute.name))
                    && attribute.value != "true"
                    && !is_numeric(&attribute.value);
                if sanitize {
                    format!("'{}' => {}({})", attribute.name, self.config.sanitizer, attribute.value)
                } else {
                    format!("'{}' => {}", attribute.name, attribute.value)
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn view_parameters(view: &str, data: &str) -> String {
    format!("'view' => {},'data' => [{}]", view, data)
}
