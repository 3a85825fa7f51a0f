//! Tokens produced by the scanner, along with the source positions they are found at.
//!
//! Tokens borrow their lexeme from the source text they were scanned from, so they are
//! cheap to copy around and never outlive the buffer.

pub mod keywords;
pub mod spanned;
pub mod token;

pub use spanned::{Span, Spanned};
pub use token::{Excerpt, Token, TokenKind};
