//! Component Module
//!
//! Tag name resolution and the split of a tag's attributes into
//! constructor data and pass-through attributes.

pub mod partition;
pub mod resolver;

pub use partition::{camel_case_keys, partition_data_and_attributes};
pub use resolver::{format_class_name, guess_view_name, ComponentResolver, ResolvedTarget};
