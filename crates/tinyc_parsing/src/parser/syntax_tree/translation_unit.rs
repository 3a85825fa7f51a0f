//! programs are the highest level

use crate::parser::{ErrorKind, Parsable, SyntacticParser, SyntaxResult};
use tinyc_ast::{FunctionDefinition, Program};
use tinyc_tokens::spanned::Spanned;
use tinyc_tokens::TokenKind;

/// `program := functionDefinition* END`
///
/// Only succeeds if the whole input, including the end of input marker, was consumed.
impl<'s> Parsable<'s> for Program<'s> {
    const NON_TERMINAL: &'static str = "Program";

    fn parse(parser: &mut SyntacticParser<'s>) -> SyntaxResult<'s, Self> {
        let start = parser.peek().span();
        let mut functions = vec![];
        while let Some(function) = parser.parse_opt::<FunctionDefinition>()? {
            functions.push(function);
        }

        if !parser.at(TokenKind::Eof) {
            return Err(parser.error(ErrorKind::unexpected_token(
                "Expected function definition or end of input",
                *parser.peek(),
            )));
        }
        let span = parser.span_from(start);
        parser.eat(TokenKind::Eof, "Expected EOF at the end of the program")?;
        Ok(Program::new(span, functions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax_tree::test_helpers::parse_as;
    use test_log::test;

    #[test]
    fn test_empty_program() {
        let (program, _) = parse_as::<Program>("  // nothing here\n");
        let program = program.expect("empty input is a valid program");
        assert!(program.functions.is_empty());
    }

    #[test]
    fn test_many_functions() {
        let (program, _) = parse_as::<Program>("int a(){return 1;} int b(){return 2;}");
        let program = program.expect("should parse");
        let names = program
            .functions
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_trailing_tokens() {
        let (program, _) = parse_as::<Program>("int main(){return 0;} 42");
        let error = program.expect_err("trailing tokens");
        assert_eq!(
            error.to_string(),
            "Expected function definition or end of input. Found INTEGER_LITERAL ('42') at line 1 col 23"
        );
        assert_eq!(error.non_terminals(), ["Program"]);
    }

    #[test]
    fn test_program_span() {
        let src = "\nint main(){return 0;}\n";
        let (program, _) = parse_as::<Program>(src);
        let span = program.expect("should parse").span();
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), "int main(){return 0;}".len());
    }
}
