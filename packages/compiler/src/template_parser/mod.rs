//! Template Parser Module
//!
//! Attribute handling for component and slot tags: shorthand rewriting,
//! tokenizing and value classification.

pub mod attributes;
pub mod binding_parser;
pub mod rewriter;

pub use attributes::{Attribute, AttributeKind, AttributeList, BoundAttributeMarks, ParsedAttributes};
pub use binding_parser::{compile_attribute_echos, tokenize_attributes, AttributeParser, RawAttribute};
pub use rewriter::AttributeRewriter;
