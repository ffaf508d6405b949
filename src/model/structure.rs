//! Begin/end marker automaton over the flat unit sequence
//!
//! Reading units left to right, every `ForBlockBegin` pushes a `For` frame and
//! every `IfBlockBegin` an `If` frame; `ElseBlockBegin` turns the innermost
//! `If` into `IfElse`; end markers pop a frame of the matching kind. Anything
//! else is a producer bug and is reported on the first offending marker.

use smallvec::SmallVec;
use tracing::warn;

use super::errors::StructureError;
use super::unit::{TemplateUnit, UnitKind};
use crate::util::span::SourceRef;

/// Open block on the automaton stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFrame {
    For,
    If,
    IfElse,
}

impl BlockFrame {
    fn begin_kind(self) -> UnitKind {
        match self {
            BlockFrame::For => UnitKind::ForBlockBegin,
            BlockFrame::If | BlockFrame::IfElse => UnitKind::IfBlockBegin,
        }
    }
}

/// What a single unit did to the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Content unit, stack unchanged
    Stay,
    Push(BlockFrame),
    /// `If` frame switched to its else branch
    Else,
    Pop(BlockFrame),
}

/// Stack automaton for one forward walk over a unit sequence
#[derive(Debug, Default)]
pub struct BlockStack<'a> {
    frames: SmallVec<[(BlockFrame, &'a SourceRef); 8]>,
}

impl<'a> BlockStack<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Innermost open block
    pub fn current(&self) -> Option<BlockFrame> {
        self.frames.last().map(|(frame, _)| *frame)
    }

    /// Feed the next unit
    pub fn step(
        &mut self,
        unit: &'a TemplateUnit,
    ) -> Result<Transition, StructureError> {
        let source_ref = unit.source_ref();
        match unit {
            TemplateUnit::ForBlockBegin(_) => {
                self.frames.push((BlockFrame::For, source_ref));
                Ok(Transition::Push(BlockFrame::For))
            }
            TemplateUnit::IfBlockBegin(_) => {
                self.frames.push((BlockFrame::If, source_ref));
                Ok(Transition::Push(BlockFrame::If))
            }
            TemplateUnit::ElseBlockBegin(_) => match self.frames.last_mut() {
                Some((frame @ BlockFrame::If, _)) => {
                    *frame = BlockFrame::IfElse;
                    Ok(Transition::Else)
                }
                Some((BlockFrame::IfElse, _)) => Err(StructureError::DuplicateElse {
                    source_ref: source_ref.clone(),
                }),
                _ => Err(StructureError::ElseWithoutIf {
                    source_ref: source_ref.clone(),
                }),
            },
            TemplateUnit::ForBlockEnd(_) => self.pop(unit, |frame| frame == BlockFrame::For),
            TemplateUnit::IfBlockEnd(_) => self.pop(unit, |frame| frame != BlockFrame::For),
            TemplateUnit::PlainText(_)
            | TemplateUnit::ValueExpression(_)
            | TemplateUnit::Option(_) => Ok(Transition::Stay),
        }
    }

    /// Succeeds only when every opened block was closed
    pub fn finish(self) -> Result<(), StructureError> {
        match self.frames.last() {
            Some((frame, source_ref)) => Err(StructureError::Unclosed {
                kind: frame.begin_kind(),
                source_ref: (*source_ref).clone(),
            }),
            None => Ok(()),
        }
    }

    fn pop(
        &mut self,
        unit: &TemplateUnit,
        matches: impl Fn(BlockFrame) -> bool,
    ) -> Result<Transition, StructureError> {
        match self.frames.last() {
            Some((frame, _)) if matches(*frame) => {
                let frame = *frame;
                self.frames.pop();
                Ok(Transition::Pop(frame))
            }
            _ => Err(StructureError::UnexpectedEnd {
                kind: unit.kind(),
                source_ref: unit.source_ref().clone(),
            }),
        }
    }
}

/// Check that begin/end markers are balanced and well nested
pub fn validate(units: &[TemplateUnit]) -> Result<(), StructureError> {
    let mut stack = BlockStack::new();
    for unit in units {
        stack.step(unit).inspect_err(|err| warn!("malformed unit sequence: {}", err))?;
    }
    stack
        .finish()
        .inspect_err(|err| warn!("malformed unit sequence: {}", err))
}

/// Tree form of the unit sequence for generators that prefer nesting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode<'a> {
    Text(&'a str),
    Value(&'a str),
    Option(&'a str),
    For {
        expression: &'a str,
        body: Vec<BlockNode<'a>>,
    },
    If {
        expression: &'a str,
        then: Vec<BlockNode<'a>>,
        otherwise: Option<Vec<BlockNode<'a>>>,
    },
}

/// Partially built block while its end marker is pending
enum OpenBlock<'a> {
    For {
        expression: &'a str,
    },
    If {
        expression: &'a str,
        then: Option<Vec<BlockNode<'a>>>,
    },
}

/// Rebuild the nested structure, failing on the same inputs as [`validate`]
pub fn build_tree(units: &[TemplateUnit]) -> Result<Vec<BlockNode<'_>>, StructureError> {
    let mut stack = BlockStack::new();
    // (block being built, nodes of the enclosing scope)
    let mut open: Vec<(OpenBlock<'_>, Vec<BlockNode<'_>>)> = Vec::new();
    let mut current: Vec<BlockNode<'_>> = Vec::new();

    for unit in units {
        let transition = stack.step(unit)?;
        match (transition, unit) {
            (Transition::Stay, TemplateUnit::PlainText(plain)) => {
                current.push(BlockNode::Text(&plain.text))
            }
            (Transition::Stay, TemplateUnit::ValueExpression(value)) => {
                current.push(BlockNode::Value(&value.expression))
            }
            (Transition::Stay, TemplateUnit::Option(option)) => {
                current.push(BlockNode::Option(&option.statement))
            }
            (Transition::Push(_), TemplateUnit::ForBlockBegin(begin)) => {
                let block = OpenBlock::For {
                    expression: &begin.expression,
                };
                open.push((block, std::mem::take(&mut current)));
            }
            (Transition::Push(_), TemplateUnit::IfBlockBegin(begin)) => {
                let block = OpenBlock::If {
                    expression: &begin.expression,
                    then: None,
                };
                open.push((block, std::mem::take(&mut current)));
            }
            (Transition::Else, _) => {
                if let Some((OpenBlock::If { then, .. }, _)) = open.last_mut() {
                    *then = Some(std::mem::take(&mut current));
                }
            }
            (Transition::Pop(_), _) => {
                if let Some((block, parent)) = open.pop() {
                    let body = std::mem::replace(&mut current, parent);
                    current.push(match block {
                        OpenBlock::For { expression } => BlockNode::For { expression, body },
                        OpenBlock::If {
                            expression,
                            then: Some(then),
                        } => BlockNode::If {
                            expression,
                            then,
                            otherwise: Some(body),
                        },
                        OpenBlock::If {
                            expression,
                            then: None,
                        } => BlockNode::If {
                            expression,
                            then: body,
                            otherwise: None,
                        },
                    });
                }
            }
            _ => {}
        }
    }

    stack.finish()?;
    Ok(current)
}
