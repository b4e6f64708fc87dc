/**
 * Expression Parser Module
 *
 * Embedded echo expressions (`{{ ... }}`, `{!! ... !!}`) inside
 * literal attribute values.
 */
pub mod echo;

pub use echo::{BladeEchoCompiler, EchoCompiler, EchoSegment};
