//! ML (Markup Language) Parser Module
//!
//! Finds component and slot tags in template text

pub mod lexer;
pub mod tokens;

pub use lexer::{scan, scan_balanced_parens};
pub use tokens::*;
