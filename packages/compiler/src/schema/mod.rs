//! Schema Module
//!
//! Capability interfaces the compiler queries while resolving tags:
//! which types exist and what their constructors take, and which
//! views exist. In-memory registries implement both for hosts that
//! know their components up front, and for tests.

pub mod type_registry;
pub mod view_finder;

pub use type_registry::*;
pub use view_finder::*;
