//! Expressions

use tinyc_tokens::spanned::{Span, Spanned};
use tinyc_tokens::Token;

/// An expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr<'s> {
    IntegerLiteral(IntegerLiteral<'s>),
}

impl Spanned for Expr<'_> {
    fn span(&self) -> Span {
        match self {
            Expr::IntegerLiteral(lit) => lit.span(),
        }
    }
}

/// An integer constant, along with its decoded value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral<'s> {
    pub token: Token<'s>,
    value: i64,
}

impl<'s> IntegerLiteral<'s> {
    /// Creates a new integer literal from its token and already decoded value
    pub fn new(token: Token<'s>, value: i64) -> Self {
        Self { token, value }
    }

    /// The decoded value of this literal
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Spanned for IntegerLiteral<'_> {
    fn span(&self) -> Span {
        self.token.span()
    }
}
