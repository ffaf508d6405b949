//! Template model errors
//!
//! `TokenError` is raised by the options layer and knows nothing about where
//! the offending text came from. `ParserError` is what a directive embedded
//! in a template produces: the same message plus the directive's location.

use std::path::PathBuf;

use thiserror::Error;

use super::unit::UnitKind;
use crate::util::span::{SourceRef, Span, SpannedError};

/// Token-level error (no source location)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Option key outside the recognized set
    #[error("Invalid option ({name}) is not a property")]
    UnknownOption { name: String },

    /// Boolean option with a value other than true/false
    #[error("Unparseable boolean [{value}] for option {name}")]
    UnparsableBoolean { name: String, value: String },

    /// Option given without a value
    #[error("{name} was null")]
    MissingValue { name: String },

    /// Java version label not in the supported set
    #[error("Unsupported javaVersion [{label}]")]
    UnsupportedJavaVersion { label: String },

    /// Charset label unknown to the charset registry
    #[error("Unknown targetCharset [{charset}]")]
    UnknownCharset { charset: String },
}

/// Source-located error raised while applying an inline directive
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Invalid option (missing = token; format name=value)")]
    MissingEquals { source_ref: SourceRef },

    #[error("Invalid option (must have only a single = token)")]
    MultipleEquals { source_ref: SourceRef },

    #[error("{source}")]
    InvalidOption {
        source_ref: SourceRef,
        #[source]
        source: TokenError,
    },
}

impl ParserError {
    pub fn source_ref(&self) -> &SourceRef {
        match self {
            ParserError::MissingEquals { source_ref }
            | ParserError::MultipleEquals { source_ref }
            | ParserError::InvalidOption { source_ref, .. } => source_ref,
        }
    }

    pub fn line(&self) -> usize {
        self.source_ref().line()
    }

    pub fn column(&self) -> usize {
        self.source_ref().column()
    }

    /// The wrapped token-level error, if any
    pub fn token_error(&self) -> Option<&TokenError> {
        match self {
            ParserError::InvalidOption { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl SpannedError for ParserError {
    fn span(&self) -> Span {
        self.source_ref().span
    }
}

/// Malformed begin/end marker sequence
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// End marker with no open block, or closing the wrong kind of block
    #[error("Unexpected {kind} at {source_ref}")]
    UnexpectedEnd { kind: UnitKind, source_ref: SourceRef },

    #[error("Else block outside of an if block at {source_ref}")]
    ElseWithoutIf { source_ref: SourceRef },

    #[error("If block already has an else block at {source_ref}")]
    DuplicateElse { source_ref: SourceRef },

    /// Begin marker never closed before the end of the unit sequence
    #[error("Unclosed {kind} opened at {source_ref}")]
    Unclosed { kind: UnitKind, source_ref: SourceRef },
}

impl StructureError {
    pub fn source_ref(&self) -> &SourceRef {
        match self {
            StructureError::UnexpectedEnd { source_ref, .. }
            | StructureError::ElseWithoutIf { source_ref }
            | StructureError::DuplicateElse { source_ref }
            | StructureError::Unclosed { source_ref, .. } => source_ref,
        }
    }
}

impl SpannedError for StructureError {
    fn span(&self) -> Span {
        self.source_ref().span
    }
}

/// Errors loading default options from a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid option in config: {0}")]
    Option(#[from] TokenError),
}
