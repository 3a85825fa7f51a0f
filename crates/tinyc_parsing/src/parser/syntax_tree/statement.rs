//! statements

use crate::parser::{CouldParse, ErrorKind, Parsable, SyntacticParser, SyntaxResult};
use tinyc_ast::{Expr, ReturnStmt, Stmt};
use tinyc_tokens::spanned::Spanned;
use tinyc_tokens::TokenKind;

impl<'s> Parsable<'s> for Stmt<'s> {
    const NON_TERMINAL: &'static str = "Stmt";

    fn parse(parser: &mut SyntacticParser<'s>) -> SyntaxResult<'s, Self> {
        if let Some(ret) = parser.parse_opt::<ReturnStmt>()? {
            return Ok(Stmt::Return(ret));
        }
        Err(parser.error(ErrorKind::unexpected_token(
            "Expected a statement (e.g., 'return')",
            *parser.peek(),
        )))
    }
}

impl<'s> CouldParse<'s> for Stmt<'s> {
    fn could_parse(parser: &SyntacticParser<'s>) -> bool {
        ReturnStmt::could_parse(parser)
    }
}

/// `returnStatement := "return" expression ";"`
impl<'s> Parsable<'s> for ReturnStmt<'s> {
    const NON_TERMINAL: &'static str = "ReturnStmt";

    fn parse(parser: &mut SyntacticParser<'s>) -> SyntaxResult<'s, Self> {
        let keyword = parser.eat(TokenKind::KeywordReturn, "Expected 'return' keyword")?;
        let value = parser.parse::<Expr>()?;
        let semicolon = parser.eat(TokenKind::Semicolon, "Expected ';' after return statement")?;
        Ok(ReturnStmt::new(
            keyword.span().join(semicolon.span()),
            keyword,
            value,
        ))
    }
}

impl<'s> CouldParse<'s> for ReturnStmt<'s> {
    fn could_parse(parser: &SyntacticParser<'s>) -> bool {
        parser.at(TokenKind::KeywordReturn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax_tree::test_helpers::parse_as;
    use test_log::test;

    #[test]
    fn test_parse_return() {
        let (stmt, parser) = parse_as::<Stmt>("return 42 ; }");
        let Stmt::Return(ret) = stmt.expect("should parse");
        assert_eq!(ret.keyword.lexeme(), "return");
        assert!(matches!(&ret.value, Some(Expr::IntegerLiteral(lit)) if lit.value() == 42));
        assert_eq!(ret.span().offset(), 0);
        assert_eq!(ret.span().len(), "return 42 ;".len());
        assert!(parser.at(TokenKind::RBrace));
    }

    #[test]
    fn test_missing_semicolon() {
        let (stmt, _) = parse_as::<Stmt>("return 1 }");
        let error = stmt.expect_err("needs a semicolon");
        assert_eq!(
            error.to_string(),
            "Expected ';' after return statement. Expected SEMICOLON, but got RBRACE ('}') at line 1 col 10"
        );
        assert_eq!(error.non_terminals(), ["Stmt", "ReturnStmt"]);
    }

    #[test]
    fn test_not_a_statement() {
        let (stmt, _) = parse_as::<Stmt>("retrun 1;");
        let error = stmt.expect_err("typo");
        assert_eq!(
            error.message(),
            "Expected a statement (e.g., 'return'). Found IDENTIFIER ('retrun')"
        );
        assert_eq!((error.line(), error.column()), (1, 1));
    }

    #[test]
    fn test_could_parse() {
        let parser = SyntacticParser::with_source("return");
        assert!(Stmt::could_parse(&parser));
        let parser = SyntacticParser::with_source("int");
        assert!(!Stmt::could_parse(&parser));
    }
}
