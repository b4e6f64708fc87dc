//! Compiler Main Module
//!
//! Drives the whole-document compile: scans the template once, then
//! hands every tag to the slot or component pipeline and stitches the
//! generated directives back between the untouched text.
//!
//! Component tags go through rewriter -> attribute parser -> resolver
//! -> partitioner -> emitter. Slot tags skip resolution and
//! partitioning.

use crate::component::{self, camel_case_keys, ComponentResolver, ResolvedTarget};
use crate::config::CompilerConfig;
use crate::error::Result;
use crate::expression_parser::{BladeEchoCompiler, EchoCompiler};
use crate::ml_parser::{scan, Segment, TagKind, TagMatch};
use crate::output::DirectiveEmitter;
use crate::schema::{TypeRegistry, ViewFinder};
use crate::template_parser::{
    tokenize_attributes, AttributeList, AttributeParser, AttributeRewriter, ParsedAttributes, RawAttribute,
};
use crate::util::{camel_case, strip_quotes};

const SLOT_NAME_ATTRIBUTE: &str = "name";
const BOUND_SLOT_NAME_ATTRIBUTE: &str = "bind:name";

/// Which tags a compile pass rewrites. Tags outside the pass are
/// copied through as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagFilter {
    All,
    Slots,
    Components,
}

impl TagFilter {
    fn accepts(self, kind: TagKind) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Slots => kind.is_slot(),
            TagFilter::Components => !kind.is_slot(),
        }
    }
}

/// Compiles `<x-...>` component and slot tags into directives.
///
/// Holds read-only configuration and the collaborators it queries; one
/// instance can compile any number of documents.
pub struct ComponentTagCompiler<'a> {
    config: CompilerConfig,
    types: &'a dyn TypeRegistry,
    views: &'a dyn ViewFinder,
    echo: Box<dyn EchoCompiler + 'a>,
}

impl<'a> ComponentTagCompiler<'a> {
    pub fn new(config: CompilerConfig, types: &'a dyn TypeRegistry, views: &'a dyn ViewFinder) -> Self {
        ComponentTagCompiler {
            config,
            types,
            views,
            echo: Box::new(BladeEchoCompiler::default()),
        }
    }

    /// Replace the compiler used for echoes inside literal attribute values
    pub fn with_echo_compiler(mut self, echo: impl EchoCompiler + 'a) -> Self {
        self.echo = Box::new(echo);
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile every component and slot tag in `source`.
    ///
    /// The first tag that fails to resolve aborts the compile; the
    /// error carries the tag's location.
    pub fn compile(&self, source: &str) -> Result<String> {
        self.compile_with(source, TagFilter::All)
    }

    /// Compile only slot tags
    pub fn compile_slots(&self, source: &str) -> Result<String> {
        self.compile_with(source, TagFilter::Slots)
    }

    /// Compile only component tags
    pub fn compile_tags(&self, source: &str) -> Result<String> {
        self.compile_with(source, TagFilter::Components)
    }

    fn compile_with(&self, source: &str, filter: TagFilter) -> Result<String> {
        let mut output = String::with_capacity(source.len());
        let mut compiled = 0usize;

        for segment in scan(source) {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Tag(tag) if filter.accepts(tag.kind) => {
                    let directive = self
                        .compile_tag(&tag)
                        .map_err(|err| err.at_location(tag.source_span.start))?;
                    output.push_str(&directive);
                    compiled += 1;
                }
                Segment::Tag(tag) => output.push_str(tag.source_span.text(source)),
            }
        }

        log::debug!("compiled {} tag(s) ({:?})", compiled, filter);
        Ok(output)
    }

    fn compile_tag(&self, tag: &TagMatch<'_>) -> Result<String> {
        let emitter = self.emitter();
        match tag.kind {
            TagKind::Opening => self.component_string(tag.name, tag.attributes),
            TagKind::SelfClosing => {
                let mut output = self.component_string(tag.name, tag.attributes)?;
                output.push_str(&emitter.self_closing_suffix());
                Ok(output)
            }
            TagKind::Closing => Ok(emitter.component_close()),
            TagKind::SlotOpening => {
                let mut output = self.slot_string(tag);
                if tag.self_closing {
                    output.push_str(&emitter.slot_close());
                }
                Ok(output)
            }
            TagKind::SlotClosing => Ok(emitter.slot_close()),
        }
    }

    /// Opening directive for a component tag with the given raw
    /// attribute text
    fn component_string(&self, component: &str, attribute_text: &str) -> Result<String> {
        let target = self.component_class(component)?;
        let parsed = self.parse_attributes(attribute_text);
        let (data, attributes) = self.partition_data_and_attributes(&target, parsed.attributes);
        let data = camel_case_keys(data);

        Ok(self
            .emitter()
            .component_open(&target, component, &data, &attributes, &parsed.bound))
    }

    fn slot_string(&self, tag: &TagMatch<'_>) -> String {
        let text = self.rewriter().rewrite(tag.attributes);
        let mut raw = tokenize_attributes(&text);

        let name = match tag.inline_name {
            Some(inline) => literal_slot_name(inline),
            None => take_slot_name(&mut raw).unwrap_or_else(|| "''".to_string()),
        };

        let parsed = AttributeParser::new(self.echo.as_ref()).parse_raw(raw);
        self.emitter().slot_open(&name, &parsed.attributes, &parsed.bound)
    }

    /// Rewrite and parse one tag's raw attribute text
    pub fn parse_attributes(&self, attribute_text: &str) -> ParsedAttributes {
        let text = self.rewriter().rewrite(attribute_text);
        AttributeParser::new(self.echo.as_ref()).parse(&text)
    }

    /// Resolve a tag name to the type or view implementing it
    pub fn component_class(&self, component: &str) -> Result<ResolvedTarget> {
        self.resolver().resolve(component)
    }

    /// Split parsed attributes into constructor data and pass-through
    /// attributes for `target`
    pub fn partition_data_and_attributes(
        &self,
        target: &ResolvedTarget,
        attributes: AttributeList,
    ) -> (AttributeList, AttributeList) {
        match target {
            ResolvedTarget::TypedComponent(class) => {
                let parameters = self.types.constructor_parameters(class).unwrap_or_default();
                component::partition_data_and_attributes(Some(&parameters), attributes)
            }
            ResolvedTarget::ViewComponent(_) | ResolvedTarget::RawView(_) => {
                component::partition_data_and_attributes(None, attributes)
            }
        }
    }

    /// Conventional type identifier for a tag name
    pub fn guess_class_name(&self, component: &str) -> String {
        self.resolver().guess_class_name(component)
    }

    /// View name for `name` inside the `prefix` directory
    pub fn guess_view_name(&self, name: &str, prefix: &str) -> String {
        component::guess_view_name(name, prefix)
    }

    /// `forms.text-input` -> `Forms\TextInput`
    pub fn format_class_name(&self, name: &str) -> String {
        component::format_class_name(name)
    }

    fn resolver(&self) -> ComponentResolver<'_> {
        ComponentResolver::new(&self.config, self.types, self.views)
    }

    fn rewriter(&self) -> AttributeRewriter<'_> {
        AttributeRewriter::new(&self.config.class_helper, &self.config.style_helper)
    }

    fn emitter(&self) -> DirectiveEmitter<'_> {
        DirectiveEmitter::new(&self.config)
    }
}

/// Remove the `name=`/`:name=` attributes from a slot's attribute list
/// and turn the last one into the slot name expression. A valueless
/// `name` is an ordinary attribute.
fn take_slot_name(raw: &mut Vec<RawAttribute<'_>>) -> Option<String> {
    let mut name = None;
    raw.retain(|attribute| match (attribute.name, attribute.value) {
        (SLOT_NAME_ATTRIBUTE, Some(value)) => {
            name = Some(literal_slot_name(strip_quotes(value)));
            false
        }
        (BOUND_SLOT_NAME_ATTRIBUTE, Some(value)) => {
            name = Some(strip_quotes(value).to_string());
            false
        }
        _ => true,
    });
    name
}

/// `'name'`, camel-cased when hyphenated
fn literal_slot_name(name: &str) -> String {
    if name.contains('-') {
        format!("'{}'", camel_case(name))
    } else {
        format!("'{}'", name)
    }
}
