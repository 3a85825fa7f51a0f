//! Character level movement over a source buffer

/// Walks the characters of a source buffer, tracking the byte offset and the line and column
/// of the next character to be read.
///
/// At most two characters of lookahead are available, through [Cursor::peek] and
/// [Cursor::peek_next].
#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    src: &'s str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(src: &'s str) -> Self {
        Self {
            src,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.src.len()
    }

    /// The next character, without consuming it
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the next one, without consuming anything
    #[inline]
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consumes the next character
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consumes the next character only if it is `expected`
    pub fn bump_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds
    pub fn eat_while<F: Fn(char) -> bool>(&mut self, predicate: F) {
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
    }

    /// Everything from `start` up to the current offset
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'s str {
        &self.src[start..self.offset]
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    #[inline]
    pub fn source(&self) -> &'s str {
        self.src
    }

    fn rest(&self) -> &'s str {
        &self.src[self.offset..]
    }
}
