//! View Finder
//!
//! Answers "does a view with this name exist". Names use dots for
//! directories and `hint::` prefixes for registered locations.

use std::collections::HashSet;

pub trait ViewFinder {
    fn exists(&self, view: &str) -> bool;
}

/// A fixed set of known view names
#[derive(Debug, Clone, Default)]
pub struct StaticViewFinder {
    views: HashSet<String>,
}

impl StaticViewFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.views.insert(view.into());
        self
    }
}

impl<S: Into<String>> FromIterator<S> for StaticViewFinder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StaticViewFinder {
            views: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ViewFinder for StaticViewFinder {
    fn exists(&self, view: &str) -> bool {
        self.views.contains(view)
    }
}
