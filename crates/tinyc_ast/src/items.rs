use crate::statements::Stmt;
use tinyc_tokens::spanned::{Span, Spanned};
use tinyc_tokens::Token;

/// A function definition, `type name() { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition<'s> {
    span: Span,
    /// The return type
    pub return_type: Token<'s>,
    /// The identifier naming the function
    pub identifier: Token<'s>,
    pub body: Vec<Stmt<'s>>,
}

impl<'s> FunctionDefinition<'s> {
    /// Creates a new function definition
    pub fn new<I: IntoIterator<Item = Stmt<'s>>>(
        span: Span,
        return_type: Token<'s>,
        identifier: Token<'s>,
        body: I,
    ) -> Self {
        Self {
            span,
            return_type,
            identifier,
            body: body.into_iter().collect(),
        }
    }

    /// The name of the function
    pub fn name(&self) -> &'s str {
        self.identifier.lexeme()
    }
}

impl Spanned for FunctionDefinition<'_> {
    fn span(&self) -> Span {
        self.span
    }
}
