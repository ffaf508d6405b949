//! Template model: the aggregate a parser fills in and a generator reads
//!
//! One [`TemplateModel`] is created per template source. The parser appends
//! imports, arguments and units strictly in source order during a single
//! pass; afterwards the model is only read.

use parking_lot::{RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

use super::content_type::{template_name_to_name, ContentType};
use super::errors::StructureError;
use super::options::{Options, SharedOptions};
use super::plain_text::{PlainTextChunker, PlainTextMap};
use super::structure::{self, BlockNode};
use super::unit::{Argument, JavaImport, PlainText, TemplateUnit, UnitVariant};
use crate::util::span::SourceRef;

#[derive(Debug)]
pub struct TemplateModel {
    // e.g. "views.system"
    package_name: String,
    // e.g. "index.rocker.html"
    template_name: String,
    content_type: ContentType,
    // e.g. "index"
    name: String,
    imports: Vec<JavaImport>,
    arguments: Vec<Argument>,
    units: Vec<TemplateUnit>,
    options: SharedOptions,
}

impl TemplateModel {
    /// New model with its own copy of `default_options`
    pub fn new(
        package_name: impl Into<String>,
        template_name: impl Into<String>,
        default_options: &Options,
    ) -> Self {
        Self::with_shared_options(
            package_name,
            template_name,
            default_options.copy().into_shared(),
        )
    }

    /// New model that aliases `options`: directives applied through this
    /// model are visible to every other holder of the handle
    pub fn with_shared_options(
        package_name: impl Into<String>,
        template_name: impl Into<String>,
        options: SharedOptions,
    ) -> Self {
        let template_name = template_name.into();
        let name = template_name_to_name(&template_name).to_string();
        let content_type = ContentType::from_template_name(&template_name);

        Self {
            package_name: package_name.into(),
            template_name,
            content_type,
            name,
            imports: Vec::new(),
            arguments: Vec::new(),
            units: Vec::new(),
            options,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn imports(&self) -> &[JavaImport] {
        &self.imports
    }

    pub fn add_import(
        &mut self,
        statement: impl Into<String>,
        source_ref: SourceRef,
    ) {
        let import = JavaImport::new(statement, source_ref);
        trace!("import: {}", import.statement);
        self.imports.push(import);
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Append an argument; a `RockerBody` argument must come last
    pub fn add_argument(
        &mut self,
        type_name: impl Into<String>,
        name: impl Into<String>,
        source_ref: SourceRef,
    ) {
        let argument = Argument::new(type_name, name, source_ref);
        trace!("arg: {} {}", argument.type_name, argument.name);
        self.arguments.push(argument);
    }

    pub fn has_rocker_body_argument(&self) -> bool {
        self.rocker_body_argument().is_some()
    }

    /// Trailing body argument, if the last argument is one
    pub fn rocker_body_argument(&self) -> Option<&Argument> {
        self.arguments.last().filter(|arg| arg.is_rocker_body())
    }

    pub fn arguments_without_rocker_body(&self) -> &[Argument] {
        match self.arguments.split_last() {
            Some((last, rest)) if last.is_rocker_body() => rest,
            _ => &self.arguments,
        }
    }

    pub fn units(&self) -> &[TemplateUnit] {
        &self.units
    }

    /// Append a unit as-is
    pub fn add_unit(
        &mut self,
        unit: impl Into<TemplateUnit>,
    ) {
        let unit = unit.into();
        trace!("unit: {} at {}", unit.kind(), unit.source_ref());
        self.units.push(unit);
    }

    /// Append static text, merging into a directly preceding plain text
    /// unit when `combineAdjacentPlain` is on
    pub fn add_plain_text(
        &mut self,
        text: &str,
        source_ref: SourceRef,
    ) {
        let combine = self.options.read().combine_adjacent_plain();
        if combine {
            if let Some(TemplateUnit::PlainText(last)) = self.units.last_mut() {
                last.append(text, &source_ref);
                return;
            }
        }
        self.add_unit(PlainText::new(text, source_ref));
    }

    /// Typed access by position; `None` if out of range or of another kind
    pub fn unit<T: UnitVariant>(
        &self,
        index: usize,
    ) -> Option<&T> {
        self.units.get(index).and_then(T::from_unit)
    }

    /// Read lock on the options. The lock is not re-entrant: with shared
    /// options, drop the guard before locking through another model or
    /// handle that holds the same options.
    pub fn options(&self) -> RwLockReadGuard<'_, Options> {
        self.options.read()
    }

    /// Write lock on the options; same re-entrancy caveat as
    /// [`options`](Self::options)
    pub fn options_mut(&self) -> RwLockWriteGuard<'_, Options> {
        self.options.write()
    }

    /// Handle to the options object, for sharing it on purpose
    pub fn shared_options(&self) -> SharedOptions {
        SharedOptions::clone(&self.options)
    }

    /// Whether this model's options are also held elsewhere
    pub fn options_are_shared(&self) -> bool {
        std::sync::Arc::strong_count(&self.options) > 1
    }

    /// Fail fast on unbalanced begin/end markers
    pub fn validate_structure(&self) -> Result<(), StructureError> {
        structure::validate(&self.units)
    }

    /// Nested view of the unit sequence
    pub fn block_tree(&self) -> Result<Vec<BlockNode<'_>>, StructureError> {
        structure::build_tree(&self.units)
    }

    /// Deduplicated, chunked plain text constants (see [`PlainTextChunker`])
    pub fn create_plain_text_map(
        &self,
        chunk_size: usize,
    ) -> PlainTextMap {
        PlainTextChunker::new(chunk_size).chunk(&self.units)
    }
}

#[cfg(test)]
mod tests;
