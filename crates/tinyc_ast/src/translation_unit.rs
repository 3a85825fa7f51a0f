//! programs are the highest level

use crate::items::FunctionDefinition;
use tinyc_tokens::spanned::{Span, Spanned};

/// The root of a syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program<'s> {
    span: Span,
    pub functions: Vec<FunctionDefinition<'s>>,
}

impl<'s> Program<'s> {
    /// Creates a new program
    pub fn new(span: Span, functions: impl IntoIterator<Item = FunctionDefinition<'s>>) -> Self {
        Self {
            span,
            functions: functions.into_iter().collect(),
        }
    }
}

impl Spanned for Program<'_> {
    fn span(&self) -> Span {
        self.span
    }
}
