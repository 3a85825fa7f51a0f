//! Grammar productions, one [Parsable] impl per syntax tree node
//!
//! ```text
//! program            := functionDefinition* END
//! functionDefinition := type IDENTIFIER "(" ")" "{" statement* "}"
//! type               := "int"
//! statement          := returnStatement
//! returnStatement    := "return" expression ";"
//! expression         := primaryExpression
//! primaryExpression  := INTEGER_LITERAL
//! ```
//!
//! [Parsable]: crate::parser::Parsable

pub mod expr;
pub mod items;
pub mod statement;
pub mod translation_unit;

#[cfg(test)]
pub(crate) mod test_helpers {
    use crate::parser::{Parsable, SyntacticParser, SyntaxResult};

    /// Parses `src` as a `P`, handing back the parser so the remaining lookahead can be checked
    pub fn parse_as<'s, P: Parsable<'s>>(src: &'s str) -> (SyntaxResult<'s, P>, SyntacticParser<'s>) {
        let mut parser = SyntacticParser::with_source(src);
        let result = parser.parse::<P>();
        (result, parser)
    }
}
