//! statements

use crate::expr::Expr;
use tinyc_tokens::spanned::{Span, Spanned};
use tinyc_tokens::Token;

/// A statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt<'s> {
    Return(ReturnStmt<'s>),
}

impl Spanned for Stmt<'_> {
    fn span(&self) -> Span {
        match self {
            Stmt::Return(ret) => ret.span(),
        }
    }
}

/// `return expr;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt<'s> {
    span: Span,
    pub keyword: Token<'s>,
    pub value: Option<Expr<'s>>,
}

impl<'s> ReturnStmt<'s> {
    pub fn new(span: Span, keyword: Token<'s>, value: impl Into<Option<Expr<'s>>>) -> Self {
        Self {
            span,
            keyword,
            value: value.into(),
        }
    }
}

impl Spanned for ReturnStmt<'_> {
    fn span(&self) -> Span {
        self.span
    }
}
