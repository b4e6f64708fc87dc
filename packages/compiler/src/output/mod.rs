//! Output Module
//!
//! Generates the directive text that replaces component and slot tags

pub mod emitter;

pub use emitter::{DirectiveEmitter, BEGIN_COMPONENT_MARKER, END_COMPONENT_MARKER};
