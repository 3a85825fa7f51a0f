//! Responsible for converting source text into a token stream

use crate::lexer::cursor::Cursor;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tinyc_tokens::spanned::Span;
use tinyc_tokens::token::{Token, TokenKind};
use tracing::{error, trace};

mod cursor;

/// Converts source text into tokens, one token per call to [Scanner::next_token].
///
/// The scanner never fails. Text that can not be scanned produces a [TokenKind::Unknown]
/// token and a [LexicalDiagnostic], and scanning carries on after it.
///
/// # Examples
/// ```
/// # use tinyc_parsing::lexer::Scanner;
/// # use tinyc_tokens::TokenKind;
/// let mut scanner = Scanner::new("return 0;");
/// assert_eq!(scanner.next_token().kind(), TokenKind::KeywordReturn);
/// assert_eq!(scanner.next_token().lexeme(), "0");
/// assert_eq!(scanner.next_token().kind(), TokenKind::Semicolon);
/// assert_eq!(scanner.next_token().kind(), TokenKind::Eof);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    cursor: Cursor<'s>,
    start: usize,
    start_line: usize,
    start_column: usize,
    diagnostics: Vec<LexicalDiagnostic>,
    log_diagnostics: bool,
    exhausted: bool,
}

impl<'s> Scanner<'s> {
    /// Creates a new scanner over some source text
    pub fn new(src: &'s str) -> Self {
        Self {
            cursor: Cursor::new(src),
            start: 0,
            start_line: 1,
            start_column: 1,
            diagnostics: vec![],
            log_diagnostics: true,
            exhausted: false,
        }
    }

    /// Stops logging lexical diagnostics as errors. They are still recorded in
    /// [Scanner::diagnostics].
    ///
    /// Used when the same source is scanned a second time, so each problem is only reported once.
    pub fn silenced(mut self) -> Self {
        self.log_diagnostics = false;
        self
    }

    /// The source text being scanned
    pub fn source(&self) -> &'s str {
        self.cursor.source()
    }

    /// Every lexical problem found so far, in the order they were found
    pub fn diagnostics(&self) -> &[LexicalDiagnostic] {
        &self.diagnostics
    }

    /// Scans the next token.
    ///
    /// Once the end of the input has been reached, every call returns an [TokenKind::Eof]
    /// token at the end position.
    pub fn next_token(&mut self) -> Token<'s> {
        let token = self.scan_token();
        trace!("scanned {token}");
        token
    }

    fn scan_token(&mut self) -> Token<'s> {
        if let Some(unterminated) = self.skip_insignificant() {
            return unterminated;
        }

        self.mark_start();
        let Some(c) = self.cursor.bump() else {
            return self.make_token(TokenKind::Eof);
        };

        match c {
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
            c if c.is_ascii_digit() => self.number(),
            '"' => self.quoted('"', TokenKind::StringLiteral, LexingError::UnterminatedString),
            '\'' => self.quoted('\'', TokenKind::CharLiteral, LexingError::UnterminatedChar),
            c => self.operator(c),
        }
    }

    /// Latches the position of the next character as the start of a token
    fn mark_start(&mut self) {
        self.start = self.cursor.offset();
        self.start_line = self.cursor.line();
        self.start_column = self.cursor.column();
    }

    /// Skips whitespace and comments.
    ///
    /// Returns an unknown token if a block comment runs into the end of the input.
    fn skip_insignificant(&mut self) -> Option<Token<'s>> {
        loop {
            match (self.cursor.peek(), self.cursor.peek_next()) {
                (Some(' ' | '\t' | '\r' | '\n'), _) => {
                    self.cursor.bump();
                }
                (Some('/'), Some('/')) => {
                    self.cursor.eat_while(|c| c != '\n');
                }
                (Some('/'), Some('*')) => {
                    self.mark_start();
                    self.cursor.bump();
                    self.cursor.bump();
                    if !self.block_comment() {
                        return Some(self.error_token(LexingError::UnterminatedBlockComment));
                    }
                }
                _ => return None,
            }
        }
    }

    /// Consumes the body of a block comment, up to and including the first `*/`.
    ///
    /// Returns `false` if the input ended first.
    fn block_comment(&mut self) -> bool {
        while !self.cursor.is_at_end() {
            if self.cursor.peek() == Some('*') && self.cursor.peek_next() == Some('/') {
                self.cursor.bump();
                self.cursor.bump();
                return true;
            }
            self.cursor.bump();
        }
        false
    }

    fn identifier(&mut self) -> Token<'s> {
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let word = self.cursor.slice_from(self.start);
        let kind = TokenKind::keyword(word).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }

    fn number(&mut self) -> Token<'s> {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        self.make_token(TokenKind::IntegerLiteral)
    }

    /// Scans a quoted literal whose opening quote has already been consumed. The character
    /// after a backslash is always taken as part of the literal.
    fn quoted(&mut self, quote: char, kind: TokenKind, unterminated: LexingError) -> Token<'s> {
        loop {
            match self.cursor.bump() {
                None => return self.error_token(unterminated),
                Some(c) if c == quote => return self.make_token(kind),
                Some('\\') => {
                    self.cursor.bump();
                }
                Some(_) => {}
            }
        }
    }

    /// Punctuation and operators. Every operator family is resolved longest match first.
    fn operator(&mut self, c: char) -> Token<'s> {
        use TokenKind::*;

        let kind = match c {
            '(' => LParen,
            ')' => RParen,
            '{' => LBrace,
            '}' => RBrace,
            '[' => LBracket,
            ']' => RBracket,
            ',' => Comma,
            '.' => Dot,
            ';' => Semicolon,
            '?' => Question,
            '~' => Tilde,
            ':' => self.either(':', DoubleColon, Colon),
            '!' => self.either('=', BangEqual, Bang),
            '=' => self.either('=', EqualEqual, Equal),
            '*' => self.either('=', StarEqual, Star),
            '/' => self.either('=', SlashEqual, Slash),
            '%' => self.either('=', PercentEqual, Percent),
            '^' => self.either('=', CaretEqual, Caret),
            '+' => self.first_of(&[('+', PlusPlus), ('=', PlusEqual)], Plus),
            '-' => self.first_of(&[('-', MinusMinus), ('=', MinusEqual), ('>', Arrow)], Minus),
            '&' => self.first_of(&[('&', AmpersandAmpersand), ('=', AmpersandEqual)], Ampersand),
            '|' => self.first_of(&[('|', PipePipe), ('=', PipeEqual)], Pipe),
            '<' => {
                if self.cursor.bump_if('<') {
                    self.either('=', LessLessEqual, LessLess)
                } else {
                    self.either('=', LessEqual, Less)
                }
            }
            '>' => {
                if self.cursor.bump_if('>') {
                    self.either('=', GreaterGreaterEqual, GreaterGreater)
                } else {
                    self.either('=', GreaterEqual, Greater)
                }
            }
            unexpected => return self.error_token(LexingError::UnexpectedChar(unexpected)),
        };
        self.make_token(kind)
    }

    /// `matched` if the next character is `next`, consuming it, `otherwise` if not
    fn either(&mut self, next: char, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        self.first_of(&[(next, matched)], otherwise)
    }

    /// The kind paired with the first listed character that comes next, consuming it
    fn first_of(&mut self, choices: &[(char, TokenKind)], otherwise: TokenKind) -> TokenKind {
        choices
            .iter()
            .find(|(next, _)| self.cursor.bump_if(*next))
            .map(|(_, kind)| *kind)
            .unwrap_or(otherwise)
    }

    fn span(&self) -> Span {
        Span::new(
            self.start,
            self.cursor.offset() - self.start,
            self.start_line,
            self.start_column,
        )
    }

    fn make_token(&self, kind: TokenKind) -> Token<'s> {
        Token::new(kind, self.cursor.slice_from(self.start), self.span())
    }

    /// Creates an unknown token covering everything scanned since the token start, and
    /// reports the problem
    fn error_token(&mut self, error: LexingError) -> Token<'s> {
        let token = self.make_token(TokenKind::Unknown);
        let diagnostic = LexicalDiagnostic {
            error,
            span: self.span(),
            lexeme: token.lexeme().to_string(),
        };
        if self.log_diagnostics {
            error!("{diagnostic}");
        } else {
            trace!("{diagnostic}");
        }
        self.diagnostics.push(diagnostic);
        token
    }
}

/// Yields every token up to and including the end of input token
impl<'s> Iterator for Scanner<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let token = self.next_token();
        self.exhausted = token.is(TokenKind::Eof);
        Some(token)
    }
}

/// Something in the source that could not be turned into a meaningful token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexingError {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
}

/// A [LexingError] along with where it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalDiagnostic {
    pub error: LexingError,
    pub span: Span,
    /// The text of the unknown token that was produced
    pub lexeme: String,
}

impl Display for LexicalDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lexical error [line {}, col {} near {:?}]: {}",
            self.span.line(),
            self.span.column(),
            self.lexeme,
            self.error
        )
    }
}
