use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use tinyc_tokens::spanned::{LineReader, Snippet, Span, Spanned};
use tinyc_tokens::{Token, TokenKind};

/// Represents an error occurring during parsing.
///
/// Displays as `<message> at line L col C`. The full diagnostic, with a source snippet and the
/// non terminals being parsed, is available through [SyntaxError::report].
#[derive(Debug, thiserror::Error)]
pub struct SyntaxError<'s> {
    pub kind: ErrorKind<'s>,
    pub location: Span,
    pub non_terminal_stack: Vec<&'static str>,
}

impl<'s> SyntaxError<'s> {
    /// Creates a new error
    pub fn new(
        kind: ErrorKind<'s>,
        location: Span,
        non_terminals: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self {
            kind,
            location,
            non_terminal_stack: non_terminals.into_iter().collect(),
        }
    }

    /// The 1-based line the error occurred at
    pub fn line(&self) -> usize {
        self.location.line()
    }

    /// The 1-based column the error occurred at
    pub fn column(&self) -> usize {
        self.location.column()
    }

    /// The error message, without its position
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// The non terminals that were being parsed when the error occurred, outermost first
    pub fn non_terminals(&self) -> &[&'static str] {
        &self.non_terminal_stack
    }

    /// The non terminal stack joined into a single path, such as `Program > Stmt`
    pub fn non_terminal_path(&self) -> String {
        self.non_terminal_stack.iter().join(" > ")
    }

    /// Gets a source snippet pointing at where this error occurred
    pub fn snippet<'a>(&self, src: &'a str) -> Snippet<'a> {
        LineReader::new(2, 0).snippet(src, self.location)
    }

    /// A multi-line diagnostic for this error against the source it came from
    pub fn report<'a>(&'a self, src: &'a str) -> Report<'a, 's> {
        Report { error: self, src }
    }
}

impl Spanned for SyntaxError<'_> {
    fn span(&self) -> Span {
        self.location
    }
}

impl Display for SyntaxError<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {} col {}",
            self.kind,
            self.line(),
            self.column()
        )
    }
}

/// Displays a [SyntaxError] along with a snippet of the source and its non terminal stack
pub struct Report<'a, 's> {
    error: &'a SyntaxError<'s>,
    src: &'a str,
}

impl Display for Report<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.error)?;
        write!(f, "{}", self.error.snippet(self.src))?;
        if !self.error.non_terminal_stack.is_empty() {
            writeln!(f, "non terminal stack:")?;
            for (idx, non_terminal) in self.error.non_terminal_stack.iter().enumerate() {
                writeln!(f, "  {}: {}", idx, non_terminal)?;
            }
        }
        Ok(())
    }
}

/// [SyntaxError] kind
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind<'s> {
    #[error("{message}. Expected {expected}, but got {} ('{}')", .found.kind(), .found.excerpt())]
    ExpectedToken {
        message: &'static str,
        expected: TokenKind,
        found: Token<'s>,
    },
    #[error("{message}. Found {} ('{}')", .found.kind(), .found.excerpt())]
    UnexpectedToken {
        message: &'static str,
        found: Token<'s>,
    },
    #[error("Integer literal '{}' does not fit in a 64-bit signed integer", .literal.lexeme())]
    IntegerOutOfRange {
        literal: Token<'s>,
        #[source]
        source: ParseIntError,
    },
}

impl<'s> ErrorKind<'s> {
    pub fn expected_token(message: &'static str, expected: TokenKind, found: Token<'s>) -> Self {
        Self::ExpectedToken {
            message,
            expected,
            found,
        }
    }

    pub fn unexpected_token(message: &'static str, found: Token<'s>) -> Self {
        Self::UnexpectedToken { message, found }
    }
}

pub type SyntaxResult<'s, T = ()> = Result<T, SyntaxError<'s>>;
