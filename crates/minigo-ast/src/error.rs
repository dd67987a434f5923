//! Error types for tree construction.
//!
//! Building a tree cannot fail except through misuse of the list append
//! operations: the fixed-shape forms are checked by the type system, but a
//! child sequence is reached through a node whose form is only known at
//! runtime. A rejected child travels back inside the error, so the caller
//! can retry it elsewhere instead of losing the subtree.

use crate::ast::Node;
use crate::span::Line;
use crate::tag::Tag;
use std::fmt;

/// Errors reported while wiring children into a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum AstError {
    /// A child was appended to a form without a child sequence.
    ///
    /// ```text
    /// append(Identifier("x"), IntLiteral(1))
    /// error: cannot append a child to Identifier: it has no child list
    /// ```
    NotAList {
        /// Form of the node that was targeted
        tag: Tag,

        /// Where that node came from
        line: Line,

        /// The child that was not appended
        child: Box<Node>,
    },

    /// A typed append helper was used on a list of another form.
    ///
    /// ```text
    /// add_statement(ArgList, ExprStmt(...))
    /// error: expected Block, found ArgList
    /// ```
    WrongList {
        /// Form the helper appends to
        expected: Tag,

        /// Form of the node that was targeted
        found: Tag,

        /// Where that node came from
        line: Line,

        /// The child that was not appended
        child: Box<Node>,
    },
}

impl AstError {
    /// Returns the line of the node the failed operation targeted.
    #[must_use]
    pub const fn line(&self) -> Line {
        match self {
            Self::NotAList { line, .. } | Self::WrongList { line, .. } => *line,
        }
    }

    /// Borrows the child the failed operation was given.
    #[must_use]
    pub fn child(&self) -> &Node {
        match self {
            Self::NotAList { child, .. } | Self::WrongList { child, .. } => child,
        }
    }

    /// Takes back the child the failed operation was given.
    #[must_use]
    pub fn into_child(self) -> Node {
        match self {
            Self::NotAList { child, .. } | Self::WrongList { child, .. } => *child,
        }
    }
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAList { tag, .. } => {
                write!(f, "cannot append a child to {tag}: it has no child list")
            }
            Self::WrongList {
                expected, found, ..
            } => write!(f, "expected {expected}, found {found}"),
        }
    }
}

impl std::error::Error for AstError {}

/// Result type for tree construction.
pub type AstResult<T> = Result<T, AstError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AstError::NotAList {
            tag: Tag::Identifier,
            line: Line::new(4),
            child: Box::new(Node::int_literal(1)),
        };
        assert_eq!(
            err.to_string(),
            "cannot append a child to Identifier: it has no child list"
        );

        let err = AstError::WrongList {
            expected: Tag::Block,
            found: Tag::ArgList,
            line: Line::UNKNOWN,
            child: Box::new(Node::break_stmt()),
        };
        assert_eq!(err.to_string(), "expected Block, found ArgList");
    }

    #[test]
    fn test_error_line_and_child() {
        let err = AstError::NotAList {
            tag: Tag::Break,
            line: Line::new(9),
            child: Box::new(Node::identifier("lost")),
        };
        assert_eq!(err.line(), Line::new(9));
        assert_eq!(err.child().text(), Some("lost"));
        assert_eq!(err.into_child(), Node::identifier("lost"));
    }
}
