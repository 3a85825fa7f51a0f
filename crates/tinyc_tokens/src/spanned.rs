//! Source positions, and a way of showing the source a position points at

use std::fmt::{Display, Formatter};

/// Something that can provide the [Span] of the source text it came from
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A region of a source buffer.
///
/// `offset` and `len` are in bytes, `line` and `column` are 1-based and count characters.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
    line: usize,
    column: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            len,
            line,
            column,
        }
    }

    /// Creates a span that encompasses both. The position is taken from whichever starts
    /// first.
    pub fn join(&self, other: Self) -> Self {
        let first = if self.offset <= other.offset {
            *self
        } else {
            other
        };
        let end = (self.offset + self.len).max(other.offset + other.len);
        Self {
            offset: first.offset,
            len: end - first.offset,
            line: first.line,
            column: first.column,
        }
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// A line reader struct that's responsible for getting lines around a span
#[derive(Debug, Default, Clone, Copy)]
pub struct LineReader {
    before: usize,
    after: usize,
}

impl LineReader {
    /// Creates a new line reader that gets `before` number of lines before a span and `after` number
    /// of lines after.
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Gets the lines of `src` surrounding the line the span starts on
    pub fn lines<'s>(&self, src: &'s str, span: &Span) -> Vec<Line<'s>> {
        let base_line = span.line();
        let first = base_line.saturating_sub(self.before).max(1);
        let last = base_line.saturating_add(self.after);
        src.lines()
            .enumerate()
            .map(|(idx, line)| Line {
                line: idx + 1,
                src: line,
            })
            .skip_while(|line| line.line < first)
            .take_while(|line| line.line <= last)
            .collect()
    }

    /// Creates a displayable snippet of `src` with the span underlined
    pub fn snippet<'s>(&self, src: &'s str, span: Span) -> Snippet<'s> {
        Snippet {
            lines: self.lines(src, &span),
            span,
        }
    }
}

/// A single line of source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'s> {
    pub line: usize,
    pub src: &'s str,
}

/// Lines of source with a marker under the span they were created for
#[derive(Debug)]
pub struct Snippet<'s> {
    lines: Vec<Line<'s>>,
    span: Span,
}

impl Display for Snippet<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self
            .lines
            .iter()
            .map(|line| line.line.to_string().len())
            .max()
            .unwrap_or(1);
        for line in &self.lines {
            writeln!(f, "{:>width$} | {}", line.line, line.src.trim_end())?;
            if line.line == self.span.line() {
                let pad = " ".repeat(self.span.column().saturating_sub(1));
                let marker = match self.span.len() {
                    0 | 1 => "^".to_string(),
                    len => format!("^{}", "~".repeat(len - 1)),
                };
                writeln!(f, "{:width$} | {pad}{marker}", "")?;
            }
        }
        Ok(())
    }
}
