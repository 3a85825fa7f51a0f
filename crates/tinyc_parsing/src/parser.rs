//! parser used for creating the AST

use crate::lexer::Scanner;
use tinyc_ast::Program;
use tinyc_tokens::spanned::{Span, Spanned};
use tinyc_tokens::{Token, TokenKind};
use tracing::{debug, trace};

pub mod error;
pub mod syntax_tree;

pub use error::*;

/// Parse a syntax tree part
pub trait Parsable<'s>: Sized {
    /// The name of the non terminal this type is parsed from
    const NON_TERMINAL: &'static str;

    /// Attempt to parse some syntax tree part
    fn parse(parser: &mut SyntacticParser<'s>) -> SyntaxResult<'s, Self>;
}

/// A sub trait that determines if this type could be parsed without doing the parsing
pub trait CouldParse<'s>: Parsable<'s> {
    /// Checks if the current lookahead can start this syntax tree part
    fn could_parse(parser: &SyntacticParser<'s>) -> bool;
}

/// Creates the syntax tree from a token stream.
///
/// The parser holds exactly one lookahead token, and every production is chosen from that
/// token alone. The first grammar violation aborts the parse, no partial tree is produced.
///
/// # Examples
/// ```
/// # use tinyc_parsing::lexer::Scanner;
/// # use tinyc_parsing::parser::SyntacticParser;
/// let mut parser = SyntacticParser::new(Scanner::new("int main() { return 0; }"));
/// let program = parser.parse_program().unwrap();
/// assert_eq!(program.functions[0].name(), "main");
/// ```
#[derive(Debug)]
pub struct SyntacticParser<'s> {
    scanner: Scanner<'s>,
    lookahead: Token<'s>,
    last_span: Option<Span>,
    non_terminals: Vec<&'static str>,
}

impl<'s> SyntacticParser<'s> {
    /// Creates a new parser with a given scanner, immediately pulling the first token
    pub fn new(mut scanner: Scanner<'s>) -> Self {
        let lookahead = scanner.next_token();
        Self {
            scanner,
            lookahead,
            last_span: None,
            non_terminals: vec![],
        }
    }

    /// Creates a new parser over some source text
    pub fn with_source(src: &'s str) -> Self {
        Self::new(Scanner::new(src))
    }

    /// Parses an entire program, up to and including the end of input
    pub fn parse_program(&mut self) -> SyntaxResult<'s, Program<'s>> {
        self.parse::<Program>()
    }

    /// The scanner this parser pulls tokens from
    pub fn scanner(&self) -> &Scanner<'s> {
        &self.scanner
    }

    /// peek the current lookahead
    pub fn peek(&self) -> &Token<'s> {
        &self.lookahead
    }

    /// Checks if the lookahead is of the given kind
    pub fn at(&self, kind: TokenKind) -> bool {
        self.lookahead.is(kind)
    }

    /// Consumes the lookahead, pulling the next token from the scanner
    pub fn advance(&mut self) -> Token<'s> {
        let next = self.scanner.next_token();
        let consumed = std::mem::replace(&mut self.lookahead, next);
        trace!("consumed {consumed}, lookahead={}", self.lookahead);
        self.last_span = Some(consumed.span());
        consumed
    }

    /// Consumes the lookahead if it's of the expected kind, otherwise fails with `message`
    pub fn eat(&mut self, expected: TokenKind, message: &'static str) -> SyntaxResult<'s, Token<'s>> {
        if self.at(expected) {
            Ok(self.advance())
        } else {
            Err(self.error(ErrorKind::expected_token(message, expected, self.lookahead)))
        }
    }

    /// Wrapper function for parsing an item.
    ///
    /// The item's non terminal is on the non terminal stack while it's being parsed.
    pub fn parse<P: Parsable<'s>>(&mut self) -> SyntaxResult<'s, P> {
        trace!("starting parsing {} lookahead={}", P::NON_TERMINAL, self.lookahead);
        self.non_terminals.push(P::NON_TERMINAL);
        let r = P::parse(self);
        if r.is_ok() {
            self.non_terminals.pop();
            debug!("parsed {}", P::NON_TERMINAL);
        }
        r
    }

    /// Wrapper function for parsing an optional item
    pub fn parse_opt<P: CouldParse<'s>>(&mut self) -> SyntaxResult<'s, Option<P>> {
        if P::could_parse(self) {
            self.parse::<P>().map(Some)
        } else {
            Ok(None)
        }
    }

    /// The span covering everything consumed since `start` was the lookahead
    pub fn span_from(&self, start: Span) -> Span {
        match self.last_span {
            Some(last) if last.offset() >= start.offset() => start.join(last),
            _ => start,
        }
    }

    /// Creates an error at the current lookahead
    pub fn error(&self, kind: ErrorKind<'s>) -> SyntaxError<'s> {
        self.error_with_span(kind, self.lookahead.span())
    }

    pub fn error_with_span(&self, kind: ErrorKind<'s>, span: Span) -> SyntaxError<'s> {
        SyntaxError::new(kind, span, self.non_terminals.iter().copied())
    }
}
