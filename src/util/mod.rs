//! Utility types and functions

pub mod logger;
pub mod span;

pub use span::{Position, SourceFile, SourceRef, Span, SpannedError};
