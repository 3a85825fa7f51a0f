//! A lexical token from a source buffer

use crate::keywords;
use crate::spanned::{Span, Spanned};
use std::fmt::{Display, Formatter};

/// A lexical token from a source buffer.
///
/// The lexeme is the exact substring of the source the token was scanned from. For
/// [TokenKind::Eof] the lexeme is empty.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token<'s> {
    kind: TokenKind,
    lexeme: &'s str,
    span: Span,
}

impl<'s> Token<'s> {
    /// Creates a new token
    pub const fn new(kind: TokenKind, lexeme: &'s str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// Gets the kind for this token
    #[inline]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the exact source text of this token
    #[inline]
    pub const fn lexeme(&self) -> &'s str {
        self.lexeme
    }

    /// The 1-based line of the first character of this token
    #[inline]
    pub const fn line(&self) -> usize {
        self.span.line()
    }

    /// The 1-based column of the first character of this token
    #[inline]
    pub const fn column(&self) -> usize {
        self.span.column()
    }

    /// Checks if this token is of the given kind
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The lexeme shortened to fit on a single line, for diagnostics
    pub fn excerpt(&self) -> Excerpt<'s> {
        Excerpt(self.lexeme)
    }
}

/// Displays at most the first [Excerpt::MAX_CHARS] characters of the first line of a lexeme,
/// followed by `...` if anything was cut off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excerpt<'s>(&'s str);

impl Excerpt<'_> {
    pub const MAX_CHARS: usize = 24;
}

impl Display for Excerpt<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let first_line = self.0.lines().next().unwrap_or("");
        let shown = match first_line.char_indices().nth(Self::MAX_CHARS) {
            Some((end, _)) => &first_line[..end],
            None => first_line,
        };
        f.write_str(shown)?;
        if shown.len() < self.0.len() {
            f.write_str("...")?;
        }
        Ok(())
    }
}

impl Spanned for Token<'_> {
    fn span(&self) -> Span {
        self.span
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' @{}:{}", self.kind, self.excerpt(), self.line(), self.column())
    }
}

/// The kind for a token.
///
/// The [Display] impl gives the stable, upper snake case name of the kind, which is what
/// shows up in diagnostics.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// (
    #[strum(serialize = "LPAREN")]
    LParen,
    /// )
    #[strum(serialize = "RPAREN")]
    RParen,
    /// {
    #[strum(serialize = "LBRACE")]
    LBrace,
    /// }
    #[strum(serialize = "RBRACE")]
    RBrace,
    /// [
    #[strum(serialize = "LBRACKET")]
    LBracket,
    /// ]
    #[strum(serialize = "RBRACKET")]
    RBracket,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Question,
    Colon,
    Tilde,

    /// !
    Bang,
    /// !=
    BangEqual,
    /// =
    Equal,
    /// ==
    EqualEqual,
    /// ++
    PlusPlus,
    /// +=
    PlusEqual,
    /// --
    MinusMinus,
    /// -=
    MinusEqual,
    /// ->
    Arrow,
    /// *=
    StarEqual,
    /// /=
    SlashEqual,
    /// %
    Percent,
    /// %=
    PercentEqual,
    /// ::
    DoubleColon,
    /// >
    Greater,
    /// >=
    GreaterEqual,
    /// <
    Less,
    /// <=
    LessEqual,
    /// <<
    LessLess,
    /// <<=
    LessLessEqual,
    /// >>
    GreaterGreater,
    /// >>=
    GreaterGreaterEqual,
    /// &
    Ampersand,
    /// &&
    AmpersandAmpersand,
    /// &=
    AmpersandEqual,
    /// |
    Pipe,
    /// ||
    PipePipe,
    /// |=
    PipeEqual,
    /// ^
    Caret,
    /// ^=
    CaretEqual,

    Identifier,
    StringLiteral,
    IntegerLiteral,
    CharLiteral,
    /// Reserved, the scanner only recognizes integer literals
    FloatLiteral,
    /// Reserved, the scanner only recognizes integer literals
    DoubleLiteral,

    KeywordIf,
    KeywordElse,
    KeywordWhile,
    KeywordReturn,
    KeywordFor,
    KeywordInt,
    KeywordVoid,
    KeywordChar,
    KeywordStruct,
    KeywordClass,
    KeywordTrue,
    KeywordFalse,
    KeywordNullptr,
    KeywordConst,
    KeywordStatic,
    KeywordPublic,
    KeywordPrivate,
    KeywordProtected,
    KeywordAuto,
    KeywordBreak,
    KeywordCase,
    KeywordContinue,
    KeywordDefault,
    KeywordDo,
    KeywordDouble,
    KeywordEnum,
    KeywordExtern,
    KeywordFloat,
    KeywordGoto,
    KeywordLong,
    KeywordRegister,
    KeywordShort,
    KeywordSigned,
    KeywordSizeof,
    KeywordSwitch,
    KeywordTypedef,
    KeywordUnion,
    KeywordUnsigned,
    KeywordVolatile,

    /// Text the scanner could not make sense of
    Unknown,
    /// EOF, will only appear as the last token of a stream
    #[strum(serialize = "END_OF_FILE")]
    Eof,
}

impl TokenKind {
    /// Gets the keyword kind for an identifier, if it exactly matches a reserved word
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        keywords::lookup(ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_log::test;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::LParen.to_string(), "LPAREN");
        assert_eq!(TokenKind::KeywordInt.to_string(), "KEYWORD_INT");
        assert_eq!(TokenKind::IntegerLiteral.to_string(), "INTEGER_LITERAL");
        assert_eq!(TokenKind::LessLessEqual.to_string(), "LESS_LESS_EQUAL");
        assert_eq!(TokenKind::Eof.to_string(), "END_OF_FILE");
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword("return"), Some(TokenKind::KeywordReturn));
        assert_eq!(TokenKind::keyword("sizeof"), None);
        assert_eq!(TokenKind::keyword("main"), None);
    }

    #[test]
    fn test_kind_names_are_unique() {
        let mut names = TokenKind::iter()
            .map(<&'static str>::from)
            .collect::<Vec<_>>();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count, "two token kinds share a name");
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TokenKind::Identifier, "main", Span::new(4, 4, 1, 5));
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.lexeme(), "main");
        assert_eq!(token.line(), 1);
        assert_eq!(token.column(), 5);
        assert!(token.is(TokenKind::Identifier));
        assert_eq!(token.to_string(), "IDENTIFIER 'main' @1:5");
    }

    #[test]
    fn test_excerpt() {
        let comment = "/* never\nclosed";
        let token = Token::new(TokenKind::Unknown, comment, Span::new(0, comment.len(), 1, 1));
        assert_eq!(token.excerpt().to_string(), "/* never...");
        assert_eq!(token.to_string(), "UNKNOWN '/* never...' @1:1");

        let long = "x".repeat(30);
        let token = Token::new(TokenKind::Identifier, &long, Span::new(0, 30, 1, 1));
        assert_eq!(token.excerpt().to_string(), format!("{}...", "x".repeat(24)));

        let token = Token::new(TokenKind::Identifier, "main", Span::new(0, 4, 1, 1));
        assert_eq!(token.excerpt().to_string(), "main");
    }
}
