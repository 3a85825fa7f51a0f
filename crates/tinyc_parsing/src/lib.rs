//! Scanning and parsing of tinyc source text.
//!
//! The [Scanner](lexer::Scanner) turns source text into [Token]s on demand, and the
//! [SyntacticParser](parser::SyntacticParser) pulls those tokens one at a time to build a
//! [Program].

use crate::lexer::Scanner;
use crate::parser::{SyntacticParser, SyntaxResult};
use tinyc_ast::Program;
use tinyc_tokens::Token;

pub mod lexer;
pub mod parser;

/// Parses source text syntactically, producing the syntax tree for the whole program.
pub fn syntactic_parse(src: &str) -> SyntaxResult<'_, Program<'_>> {
    let mut parser = SyntacticParser::new(Scanner::new(src));
    parser.parse_program()
}

/// Scans all of `src`, the last token always being the end of input.
pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    Scanner::new(src).collect()
}
