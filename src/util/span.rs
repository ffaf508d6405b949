//! Source location tracking

use std::fmt;

/// Source position (line, column, and byte offset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// Byte offset from start of file
    pub offset: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            line,
            column,
            offset: 0,
        }
    }

    /// Create a new position with offset
    #[inline]
    pub fn with_offset(
        line: usize,
        column: usize,
        offset: usize,
    ) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Create a dummy position
    #[inline]
    pub fn dummy() -> Self {
        Self::default()
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source span (start position to end position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Span {
    /// Create a new span
    #[inline]
    pub fn new(
        start: Position,
        end: Position,
    ) -> Self {
        Self { start, end }
    }

    /// Create a dummy span
    #[inline]
    pub fn dummy() -> Self {
        Self::default()
    }

    /// Check if this is a dummy span
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.start.line == 0
    }

    /// Get the source text length
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Check if span is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

impl fmt::Display for Span {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[{} - {}]", self.start, self.end)
    }
}

/// Location of a template construct plus the raw text it was parsed from.
///
/// Every unit, import, argument and option directive carries one so that
/// later stages can point diagnostics back at the template source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SourceRef {
    /// Covered region
    pub span: Span,
    /// Source excerpt
    pub text: String,
}

impl SourceRef {
    pub fn new(
        span: Span,
        text: impl Into<String>,
    ) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    /// Source reference pointing at a single line/column
    pub fn at(
        line: usize,
        column: usize,
        text: impl Into<String>,
    ) -> Self {
        let position = Position::new(line, column);
        Self::new(Span::new(position, position), text)
    }

    /// Placeholder for constructs synthesized outside of any template
    pub fn dummy() -> Self {
        Self::default()
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.span.start.column
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Excerpt with control whitespace escaped so it fits on one log line
    pub fn console_friendly_text(&self) -> String {
        console_friendly_text(&self.text)
    }
}

impl fmt::Display for SourceRef {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[{}, {}]", self.line(), self.column())
    }
}

/// Escape newlines, carriage returns and tabs
pub fn console_friendly_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Source file information
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// File name
    pub name: String,
    /// File content
    pub content: String,
    /// Line start offsets for fast line lookup
    line_offsets: Vec<usize>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        let mut line_offsets = vec![0];
        line_offsets.extend(
            content
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );

        Self {
            name: name.into(),
            content,
            line_offsets,
        }
    }

    /// Number of lines in the file
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Get position from byte offset
    pub fn position_from_offset(
        &self,
        offset: usize,
    ) -> Position {
        let line = self.line_offsets.partition_point(|&o| o <= offset);
        let line_start = self.line_offsets[line.saturating_sub(1)];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |line| line.chars().count());
        Position::with_offset(line, column + 1, offset)
    }

    /// Get span from byte range
    pub fn span_from_range(
        &self,
        start: usize,
        end: usize,
    ) -> Span {
        Span::new(
            self.position_from_offset(start),
            self.position_from_offset(end),
        )
    }

    /// Get source text for a span
    pub fn source_text(
        &self,
        span: Span,
    ) -> Option<&str> {
        self.content.get(span.start.offset..span.end.offset)
    }

    /// Build a source reference for a byte range, excerpt included
    pub fn source_ref(
        &self,
        start: usize,
        end: usize,
    ) -> SourceRef {
        let span = self.span_from_range(start, end);
        let text = self.source_text(span).unwrap_or_default();
        SourceRef::new(span, text)
    }
}

impl fmt::Display for SourceFile {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Errors that can point at a source location
pub trait SpannedError {
    /// Get the source span of the error
    fn span(&self) -> Span;
}

#[cfg(test)]
mod tests;
