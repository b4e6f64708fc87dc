#![deny(clippy::all)]

//! Component Tag Compiler
//!
//! Rewrites `<x-...>` component and slot tags in template source into
//! the directive form the downstream template engine executes.

pub mod chars;
pub mod compiler;
pub mod component;
pub mod config;
pub mod error;
pub mod parse_util;
pub mod util;

// Parser modules
pub mod expression_parser;
pub mod ml_parser;
pub mod template_parser;

// Compilation modules
pub mod output;
pub mod schema;

// Re-exports
pub use compiler::ComponentTagCompiler;
pub use component::ResolvedTarget;
pub use config::{AnonymousComponentPath, CompilerConfig};
pub use error::{CompileError, Result};
pub use expression_parser::{BladeEchoCompiler, EchoCompiler, EchoSegment};
pub use ml_parser::{scan, Segment, TagKind, TagMatch};
pub use parse_util::{ParseLocation, ParseSourceSpan};
pub use schema::{ParameterNameSet, StaticTypeRegistry, StaticViewFinder, TypeRegistry, ViewFinder};
pub use template_parser::{Attribute, AttributeKind, AttributeList, BoundAttributeMarks, ParsedAttributes};
