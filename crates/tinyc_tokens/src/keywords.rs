//! The reserved words of the language.

use crate::token::TokenKind;

/// Every reserved word and the token kind it scans as, sorted by spelling so it can be
/// binary searched.
///
/// Keyword kinds missing from this table, such as [TokenKind::KeywordSizeof], are never
/// produced by the scanner; those words scan as identifiers.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("char", TokenKind::KeywordChar),
    ("class", TokenKind::KeywordClass),
    ("const", TokenKind::KeywordConst),
    ("double", TokenKind::KeywordDouble),
    ("else", TokenKind::KeywordElse),
    ("false", TokenKind::KeywordFalse),
    ("for", TokenKind::KeywordFor),
    ("if", TokenKind::KeywordIf),
    ("int", TokenKind::KeywordInt),
    ("nullptr", TokenKind::KeywordNullptr),
    ("private", TokenKind::KeywordPrivate),
    ("protected", TokenKind::KeywordProtected),
    ("public", TokenKind::KeywordPublic),
    ("return", TokenKind::KeywordReturn),
    ("static", TokenKind::KeywordStatic),
    ("struct", TokenKind::KeywordStruct),
    ("true", TokenKind::KeywordTrue),
    ("void", TokenKind::KeywordVoid),
    ("while", TokenKind::KeywordWhile),
];

/// Looks up the keyword kind for a word. Only an exact, case sensitive match counts.
pub fn lookup(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .binary_search_by(|(spelling, _)| (*spelling).cmp(word))
        .ok()
        .map(|idx| KEYWORDS[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_table_is_sorted() {
        assert!(
            KEYWORDS.windows(2).all(|pair| pair[0].0 < pair[1].0),
            "keyword table must be strictly sorted for binary search"
        );
    }

    #[test]
    fn test_every_entry_is_found() {
        for (spelling, kind) in KEYWORDS {
            assert_eq!(lookup(spelling), Some(*kind), "{spelling} not found");
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(lookup("int"), Some(TokenKind::KeywordInt));
        assert_eq!(lookup("in"), None);
        assert_eq!(lookup("integer"), None);
        assert_eq!(lookup("Int"), None);
        assert_eq!(lookup("RETURN"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_unreserved_c_keywords() {
        assert_eq!(KEYWORDS.len(), 19);
        for word in ["sizeof", "long", "auto", "switch", "unsigned", "typedef", "goto"] {
            assert_eq!(lookup(word), None, "{word} should not be reserved");
        }
    }
}
