//! Expressions

use crate::parser::{CouldParse, ErrorKind, Parsable, SyntacticParser, SyntaxResult};
use tinyc_ast::{Expr, IntegerLiteral};
use tinyc_tokens::spanned::Spanned;
use tinyc_tokens::TokenKind;

/// `expression := primaryExpression`
impl<'s> Parsable<'s> for Expr<'s> {
    const NON_TERMINAL: &'static str = "Expr";

    fn parse(parser: &mut SyntacticParser<'s>) -> SyntaxResult<'s, Self> {
        parse_primary(parser)
    }
}

impl<'s> CouldParse<'s> for Expr<'s> {
    fn could_parse(parser: &SyntacticParser<'s>) -> bool {
        IntegerLiteral::could_parse(parser)
    }
}

fn parse_primary<'s>(parser: &mut SyntacticParser<'s>) -> SyntaxResult<'s, Expr<'s>> {
    match parser.parse_opt::<IntegerLiteral>()? {
        Some(literal) => Ok(Expr::IntegerLiteral(literal)),
        None => Err(parser.error(ErrorKind::unexpected_token(
            "Expected an integer literal or other primary expression",
            *parser.peek(),
        ))),
    }
}

/// Decodes the literal's digits, which must fit in an `i64`
impl<'s> Parsable<'s> for IntegerLiteral<'s> {
    const NON_TERMINAL: &'static str = "IntegerLiteral";

    fn parse(parser: &mut SyntacticParser<'s>) -> SyntaxResult<'s, Self> {
        let token = parser.eat(TokenKind::IntegerLiteral, "Expected an integer literal")?;
        let value = token.lexeme().parse::<i64>().map_err(|source| {
            parser.error_with_span(
                ErrorKind::IntegerOutOfRange {
                    literal: token,
                    source,
                },
                token.span(),
            )
        })?;
        Ok(IntegerLiteral::new(token, value))
    }
}

impl<'s> CouldParse<'s> for IntegerLiteral<'s> {
    fn could_parse(parser: &SyntacticParser<'s>) -> bool {
        parser.at(TokenKind::IntegerLiteral)
    }
}
