//! Template intermediate representation
//!
//! - [`template`] - the per-template aggregate ([`TemplateModel`])
//! - [`unit`] - flat unit sequence, imports and arguments
//! - [`options`] - validated per-template compiler options
//! - [`structure`] - begin/end marker automaton and tree view
//! - [`plain_text`] - deduplicated, chunked text constant tables
//! - [`errors`] - token-level, source-located and structural errors

pub mod content_type;
pub mod dump;
pub mod errors;
pub mod options;
pub mod plain_text;
pub mod structure;
pub mod template;
pub mod unit;

pub use content_type::ContentType;
pub use errors::{ConfigError, ParserError, StructureError, TokenError};
pub use options::{load_options, JavaVersion, OptionKey, Options, SharedOptions};
pub use plain_text::{ChunkMeasure, PlainTextChunker, PlainTextMap};
pub use structure::{BlockFrame, BlockNode, BlockStack};
pub use template::TemplateModel;
pub use unit::{
    Argument, ElseBlockBegin, ForBlockBegin, ForBlockEnd, IfBlockBegin, IfBlockEnd, JavaImport,
    OptionDirective, PlainText, TemplateUnit, UnitKind, UnitVariant, ValueExpression,
    ROCKER_BODY_TYPE,
};
