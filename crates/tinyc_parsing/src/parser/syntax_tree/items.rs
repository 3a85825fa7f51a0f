//! Top level items

use crate::parser::{CouldParse, Parsable, SyntacticParser, SyntaxResult};
use tinyc_ast::{FunctionDefinition, Stmt};
use tinyc_tokens::spanned::Spanned;
use tinyc_tokens::{Token, TokenKind};

/// `type := "int"`
fn parse_type<'s>(parser: &mut SyntacticParser<'s>) -> SyntaxResult<'s, Token<'s>> {
    parser.eat(TokenKind::KeywordInt, "Expected 'int' as return type")
}

/// `functionDefinition := type IDENTIFIER "(" ")" "{" statement* "}"`
impl<'s> Parsable<'s> for FunctionDefinition<'s> {
    const NON_TERMINAL: &'static str = "FunctionDefinition";

    fn parse(parser: &mut SyntacticParser<'s>) -> SyntaxResult<'s, Self> {
        let return_type = parse_type(parser)?;
        let identifier = parser.eat(TokenKind::Identifier, "Expected function name")?;
        parser.eat(TokenKind::LParen, "Expected '(' after function name")?;
        parser.eat(TokenKind::RParen, "Expected ')' after function parameters")?;
        parser.eat(TokenKind::LBrace, "Expected '{' before function body")?;

        let mut body = vec![];
        while !parser.at(TokenKind::RBrace) && !parser.at(TokenKind::Eof) {
            body.push(parser.parse::<Stmt>()?);
        }

        let rbrace = parser.eat(TokenKind::RBrace, "Expected '}' after function body")?;
        Ok(FunctionDefinition::new(
            return_type.span().join(rbrace.span()),
            return_type,
            identifier,
            body,
        ))
    }
}

impl<'s> CouldParse<'s> for FunctionDefinition<'s> {
    fn could_parse(parser: &SyntacticParser<'s>) -> bool {
        parser.at(TokenKind::KeywordInt)
    }
}
