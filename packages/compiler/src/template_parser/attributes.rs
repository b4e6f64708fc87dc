//! Parsed Attributes
//!
//! Ordered attribute collection of one tag and the set of attribute
//! names that were bound (`bind:`/`:`) on that tag.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Names of the attributes bound on the tag being compiled. Created by
/// the attribute parser for one tag and dropped with it.
pub type BoundAttributeMarks = IndexSet<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttributeKind {
    /// Quoted string literal, echoes already spliced in
    Literal,
    /// Raw host expression
    Bound,
    /// The parent's attribute bag forwarded as `attributes`
    AttributeBagSpread,
}

impl AttributeKind {
    pub fn is_bound(self) -> bool {
        matches!(self, AttributeKind::Bound | AttributeKind::AttributeBagSpread)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    /// Host expression text. Literal values are already single-quoted.
    pub value: String,
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: AttributeKind) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }

    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, AttributeKind::Literal)
    }

    pub fn bound(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, AttributeKind::Bound)
    }
}

/// Insertion-ordered attributes with unique names. Re-inserting a name
/// replaces the value but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeList {
    entries: IndexMap<String, Attribute>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.entries.insert(attribute.name.clone(), attribute)
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.entries.get(name)
    }

    /// Remove an attribute, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Attribute> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut list = AttributeList::new();
        for attribute in iter {
            list.insert(attribute);
        }
        list
    }
}

impl IntoIterator for AttributeList {
    type Item = Attribute;
    type IntoIter = indexmap::map::IntoValues<String, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = indexmap::map::Values<'a, String, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Output of parsing one tag's attribute text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAttributes {
    pub attributes: AttributeList,
    pub bound: BoundAttributeMarks,
}

impl ParsedAttributes {
    pub fn is_bound(&self, name: &str) -> bool {
        self.bound.contains(name)
    }
}
