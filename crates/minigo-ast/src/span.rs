//! Source line tracking for AST nodes.
//!
//! Nodes only remember the line they started on. The tree never reads or
//! validates it; it exists so that later phases can point at the source when
//! they report an error.
//!
//! # Examples
//!
//! ```
//! use minigo_ast::span::{Line, Located};
//! use minigo_ast::Node;
//!
//! let ident = Node::identifier("x").at_line(Line::new(3));
//! assert_eq!(ident.line(), Line::new(3));
//! assert_eq!(ident.line().to_string(), "line 3");
//! ```

use std::fmt;

/// A 1-indexed source line. `0` means the line is not known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Line(u32);

impl Line {
    /// The line of a node nobody has located yet.
    pub const UNKNOWN: Line = Line(0);

    /// Creates a line number.
    #[must_use]
    pub const fn new(line: u32) -> Self {
        Self(line)
    }

    /// Returns the raw line number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` unless this is [`Line::UNKNOWN`].
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 != 0
    }
}

impl From<u32> for Line {
    fn from(line: u32) -> Self {
        Self(line)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "line {}", self.0)
        } else {
            f.write_str("unknown line")
        }
    }
}

/// Implemented by anything that can report where it came from.
pub trait Located {
    /// Returns the source line of this item.
    fn line(&self) -> Line;
}

impl Located for Line {
    fn line(&self) -> Line {
        *self
    }
}
