//! Compiler Errors
//!
//! Resolution failures abort the compile of the whole document.
//! Tags that do not match the tag grammar are never errors; they
//! are passed through untouched.

use crate::parse_util::ParseLocation;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompileError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A registered alias names neither an existing type nor an existing view.
    #[error("Unable to locate class or view [{alias}] for component [{component}].{}", at(.location))]
    UnresolvedAlias {
        alias: String,
        component: String,
        location: Option<ParseLocation>,
    },

    /// No resolution strategy produced a target for the tag name.
    #[error("Unable to locate a class or view for component [{component}].{}", at(.location))]
    UnresolvedComponent {
        component: String,
        location: Option<ParseLocation>,
    },

    /// A configuration document could not be read.
    #[error("Invalid compiler configuration: {0}")]
    InvalidConfig(String),
}

impl CompileError {
    /// Attach the location of the offending tag. Errors raised by the
    /// resolver do not know where the tag came from; the driver fills
    /// it in on the way out.
    pub fn at_location(self, location: ParseLocation) -> Self {
        match self {
            CompileError::UnresolvedAlias {
                alias, component, ..
            } => CompileError::UnresolvedAlias {
                alias,
                component,
                location: Some(location),
            },
            CompileError::UnresolvedComponent { component, .. } => {
                CompileError::UnresolvedComponent {
                    component,
                    location: Some(location),
                }
            }
            other => other,
        }
    }

    /// The tag name the error is about, when there is one
    pub fn component(&self) -> Option<&str> {
        match self {
            CompileError::UnresolvedAlias { component, .. }
            | CompileError::UnresolvedComponent { component, .. } => Some(component),
            CompileError::InvalidConfig(_) => None,
        }
    }
}

fn at(location: &Option<ParseLocation>) -> String {
    location
        .map(|location| format!(" (at {})", location))
        .unwrap_or_default()
}

impl From<serde_json::Error> for CompileError {
    fn from(err: serde_json::Error) -> Self {
        CompileError::InvalidConfig(err.to_string())
    }
}
