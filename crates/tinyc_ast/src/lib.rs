//! The syntax tree of a tinyc program.
//!
//! Every node exclusively owns its children, and nodes are never mutated once built. Leaf
//! nodes keep the [Token](tinyc_tokens::Token)s they were parsed from, so a tree borrows
//! from the source text it was parsed out of.

pub mod expr;
pub mod items;
pub mod pretty;
pub mod statements;
pub mod translation_unit;

pub use expr::{Expr, IntegerLiteral};
pub use items::FunctionDefinition;
pub use pretty::TreeDisplay;
pub use statements::{ReturnStmt, Stmt};
pub use translation_unit::Program;
