//! Template units
//!
//! A parsed template body is a flat, ordered list of [`TemplateUnit`]s. Nested
//! control flow is encoded with begin/end markers rather than child lists:
//!
//! ```text
//! @for (item : items) {        ForBlockBegin("item : items")
//!   <li>@item</li>             PlainText("<li>"), ValueExpression("item"), PlainText("</li>")
//! }                            ForBlockEnd
//! ```
//!
//! The producer guarantees the markers are balanced; see
//! [`structure`](super::structure) for the consumer-side check.

use std::fmt;

use crate::util::span::SourceRef;

/// Argument type marking a trailing body block argument
pub const ROCKER_BODY_TYPE: &str = "RockerBody";

/// Static text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText {
    pub text: String,
    pub source_ref: SourceRef,
}

impl PlainText {
    pub fn new(
        text: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        Self {
            text: text.into(),
            source_ref,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace only (or empty)
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// Extend with text that directly follows this unit in the source;
    /// `source_ref` locates the appended piece and moves the span end
    pub fn append(
        &mut self,
        text: &str,
        source_ref: &SourceRef,
    ) {
        self.text.push_str(text);
        self.source_ref.text.push_str(text);
        if !self.source_ref.span.is_dummy() && !source_ref.span.is_dummy() {
            self.source_ref.span.end = source_ref.span.end;
        }
    }
}

/// `@expr` value output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueExpression {
    pub expression: String,
    pub source_ref: SourceRef,
}

impl ValueExpression {
    pub fn new(
        expression: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        Self {
            expression: expression.into(),
            source_ref,
        }
    }
}

/// `@for (...) {`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForBlockBegin {
    pub expression: String,
    pub source_ref: SourceRef,
}

impl ForBlockBegin {
    pub fn new(
        expression: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        Self {
            expression: expression.into(),
            source_ref,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForBlockEnd {
    pub source_ref: SourceRef,
}

/// `@if (...) {`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfBlockBegin {
    pub expression: String,
    pub source_ref: SourceRef,
}

impl IfBlockBegin {
    pub fn new(
        expression: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        Self {
            expression: expression.into(),
            source_ref,
        }
    }
}

/// `} else {`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElseBlockBegin {
    pub source_ref: SourceRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfBlockEnd {
    pub source_ref: SourceRef,
}

/// Inline `@option name=value`, statement kept raw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDirective {
    pub statement: String,
    pub source_ref: SourceRef,
}

impl OptionDirective {
    pub fn new(
        statement: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        Self {
            statement: statement.into(),
            source_ref,
        }
    }
}

/// One element of the flat unit sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateUnit {
    PlainText(PlainText),
    ValueExpression(ValueExpression),
    ForBlockBegin(ForBlockBegin),
    ForBlockEnd(ForBlockEnd),
    IfBlockBegin(IfBlockBegin),
    ElseBlockBegin(ElseBlockBegin),
    IfBlockEnd(IfBlockEnd),
    Option(OptionDirective),
}

/// Payload-free tag of a [`TemplateUnit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    PlainText,
    ValueExpression,
    ForBlockBegin,
    ForBlockEnd,
    IfBlockBegin,
    ElseBlockBegin,
    IfBlockEnd,
    Option,
}

impl UnitKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitKind::PlainText => "plain text",
            UnitKind::ValueExpression => "value expression",
            UnitKind::ForBlockBegin => "for block begin",
            UnitKind::ForBlockEnd => "for block end",
            UnitKind::IfBlockBegin => "if block begin",
            UnitKind::ElseBlockBegin => "else block begin",
            UnitKind::IfBlockEnd => "if block end",
            UnitKind::Option => "option",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TemplateUnit {
    pub fn plain_text(
        text: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        TemplateUnit::PlainText(PlainText::new(text, source_ref))
    }

    pub fn value(
        expression: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        TemplateUnit::ValueExpression(ValueExpression::new(expression, source_ref))
    }

    pub fn for_begin(
        expression: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        TemplateUnit::ForBlockBegin(ForBlockBegin::new(expression, source_ref))
    }

    pub fn for_end(source_ref: SourceRef) -> Self {
        TemplateUnit::ForBlockEnd(ForBlockEnd { source_ref })
    }

    pub fn if_begin(
        expression: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        TemplateUnit::IfBlockBegin(IfBlockBegin::new(expression, source_ref))
    }

    pub fn else_begin(source_ref: SourceRef) -> Self {
        TemplateUnit::ElseBlockBegin(ElseBlockBegin { source_ref })
    }

    pub fn if_end(source_ref: SourceRef) -> Self {
        TemplateUnit::IfBlockEnd(IfBlockEnd { source_ref })
    }

    pub fn option(
        statement: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        TemplateUnit::Option(OptionDirective::new(statement, source_ref))
    }

    pub fn kind(&self) -> UnitKind {
        match self {
            TemplateUnit::PlainText(_) => UnitKind::PlainText,
            TemplateUnit::ValueExpression(_) => UnitKind::ValueExpression,
            TemplateUnit::ForBlockBegin(_) => UnitKind::ForBlockBegin,
            TemplateUnit::ForBlockEnd(_) => UnitKind::ForBlockEnd,
            TemplateUnit::IfBlockBegin(_) => UnitKind::IfBlockBegin,
            TemplateUnit::ElseBlockBegin(_) => UnitKind::ElseBlockBegin,
            TemplateUnit::IfBlockEnd(_) => UnitKind::IfBlockEnd,
            TemplateUnit::Option(_) => UnitKind::Option,
        }
    }

    pub fn source_ref(&self) -> &SourceRef {
        match self {
            TemplateUnit::PlainText(u) => &u.source_ref,
            TemplateUnit::ValueExpression(u) => &u.source_ref,
            TemplateUnit::ForBlockBegin(u) => &u.source_ref,
            TemplateUnit::ForBlockEnd(u) => &u.source_ref,
            TemplateUnit::IfBlockBegin(u) => &u.source_ref,
            TemplateUnit::ElseBlockBegin(u) => &u.source_ref,
            TemplateUnit::IfBlockEnd(u) => &u.source_ref,
            TemplateUnit::Option(u) => &u.source_ref,
        }
    }

    /// Typed view of this unit, `None` if it is another kind
    pub fn downcast<T: UnitVariant>(&self) -> Option<&T> {
        T::from_unit(self)
    }
}

/// Concrete unit payload that can be pulled back out of a [`TemplateUnit`]
pub trait UnitVariant: Sized {
    const KIND: UnitKind;

    fn from_unit(unit: &TemplateUnit) -> Option<&Self>;
}

macro_rules! unit_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl UnitVariant for $ty {
                const KIND: UnitKind = UnitKind::$variant;

                fn from_unit(unit: &TemplateUnit) -> Option<&Self> {
                    match unit {
                        TemplateUnit::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for TemplateUnit {
                fn from(inner: $ty) -> Self {
                    TemplateUnit::$variant(inner)
                }
            }
        )*
    };
}

unit_variant! {
    PlainText => PlainText,
    ValueExpression => ValueExpression,
    ForBlockBegin => ForBlockBegin,
    ForBlockEnd => ForBlockEnd,
    IfBlockBegin => IfBlockBegin,
    ElseBlockBegin => ElseBlockBegin,
    IfBlockEnd => IfBlockEnd,
    Option => OptionDirective,
}

/// `import` statement from the template header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaImport {
    pub statement: String,
    pub source_ref: SourceRef,
}

impl JavaImport {
    pub fn new(
        statement: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        Self {
            statement: statement.into(),
            source_ref,
        }
    }
}

/// Template argument from `@args (...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub type_name: String,
    pub name: String,
    pub source_ref: SourceRef,
}

impl Argument {
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        source_ref: SourceRef,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            source_ref,
        }
    }

    pub fn is_rocker_body(&self) -> bool {
        self.type_name == ROCKER_BODY_TYPE
    }
}
