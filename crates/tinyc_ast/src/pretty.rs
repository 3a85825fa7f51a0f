//! Debug rendering of a syntax tree.
//!
//! Each node is written on its own line, indented two spaces per level of nesting:
//! ```text
//! ProgramNode
//!   FunctionDefinitionNode: int main()
//!   Body:
//!     ReturnStatementNode (return)
//!       IntegerLiteralNode: 123 (Value: 123)
//! ```

use crate::expr::{Expr, IntegerLiteral};
use crate::items::FunctionDefinition;
use crate::statements::{ReturnStmt, Stmt};
use crate::translation_unit::Program;
use std::fmt::{self, Display, Formatter};

/// A node that can write itself, and everything under it, as an indented tree
pub trait TreeDisplay {
    /// Writes this node at the given nesting depth
    fn fmt_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result;

    /// Gets a displayable view of this node rooted at `depth`
    fn tree(&self, depth: usize) -> Tree<'_, Self> {
        Tree { node: self, depth }
    }
}

/// A [TreeDisplay] node rooted at some depth
pub struct Tree<'a, T: ?Sized> {
    node: &'a T,
    depth: usize,
}

impl<T: TreeDisplay + ?Sized> Display for Tree<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.node.fmt_tree(f, self.depth)
    }
}

struct Indent(usize);

impl Display for Indent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.0 * 2)
    }
}

impl TreeDisplay for Program<'_> {
    fn fmt_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}ProgramNode", Indent(depth))?;
        for function in &self.functions {
            function.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl TreeDisplay for FunctionDefinition<'_> {
    fn fmt_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{}FunctionDefinitionNode: {} {}()",
            Indent(depth),
            self.return_type.lexeme(),
            self.identifier.lexeme()
        )?;
        writeln!(f, "{}Body:", Indent(depth))?;
        if self.body.is_empty() {
            writeln!(f, "{}<empty body>", Indent(depth + 1))?;
        }
        for stmt in &self.body {
            stmt.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl TreeDisplay for Stmt<'_> {
    fn fmt_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Stmt::Return(ret) => ret.fmt_tree(f, depth),
        }
    }
}

impl TreeDisplay for ReturnStmt<'_> {
    fn fmt_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{}ReturnStatementNode ({})",
            Indent(depth),
            self.keyword.lexeme()
        )?;
        match &self.value {
            Some(expr) => expr.fmt_tree(f, depth + 1),
            None => writeln!(f, "{}<no return value>", Indent(depth + 1)),
        }
    }
}

impl TreeDisplay for Expr<'_> {
    fn fmt_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Expr::IntegerLiteral(lit) => lit.fmt_tree(f, depth),
        }
    }
}

impl TreeDisplay for IntegerLiteral<'_> {
    fn fmt_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{}IntegerLiteralNode: {} (Value: {})",
            Indent(depth),
            self.token.lexeme(),
            self.value()
        )
    }
}

macro_rules! display_as_tree {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Display for $ty<'_> {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    self.fmt_tree(f, 0)
                }
            }
        )*
    };
}

display_as_tree!(Program, FunctionDefinition, Stmt, ReturnStmt, Expr, IntegerLiteral);
