//! Indented tree dumps for debugging.
//!
//! Each node becomes one line, indented by its depth, showing the tag's
//! display name and, when the form carries one, its payload:
//!
//! ```text
//! BinaryOp: +
//!   Identifier: x
//!   IntLiteral: 5
//! ```
//!
//! The format is meant for people reading compiler output. It is not a
//! serialization format and may change.

use crate::ast::Node;
use crate::walk::Walk;
use std::fmt;
use std::io;

/// Configuration for tree dumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    /// Indentation added per level of depth
    pub indent: String,
    /// Digits after the decimal point for float literals
    pub float_precision: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            float_precision: 6,
        }
    }
}

/// Writes trees in the dump format described in the [module docs](self).
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    config: PrintConfig,
}

impl TreePrinter {
    /// Creates a printer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: PrintConfig) -> Self {
        self.config = config;
        self
    }

    /// Writes `node` and its descendants, the root indented `depth` levels.
    ///
    /// Writes nothing for an absent node.
    ///
    /// # Errors
    ///
    /// Propagates errors from the sink.
    pub fn write<W: fmt::Write>(&self, node: Option<&Node>, depth: usize, out: &mut W) -> fmt::Result {
        let Some(node) = node else {
            return Ok(());
        };

        for (level, node) in Walk::new(node, depth) {
            for _ in 0..level {
                out.write_str(&self.config.indent)?;
            }
            out.write_str(node.tag().name())?;
            if let Some(payload) = node.payload() {
                write!(out, ": {payload:.precision$}", precision = self.config.float_precision)?;
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Renders `node` into a new string, starting at depth 0.
    #[must_use]
    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write(Some(node), 0, &mut out);
        out
    }
}

/// Writes the dump of `node` to an I/O sink with the default configuration.
///
/// # Errors
///
/// Returns any error raised by `out`.
///
/// # Examples
///
/// ```
/// use minigo_ast::{print, Node};
///
/// let mut out = Vec::new();
/// print(Some(&Node::identifier("x")), 1, &mut out).unwrap();
/// assert_eq!(out, b"  Identifier: x\n");
/// ```
pub fn print<W: io::Write>(node: Option<&Node>, depth: usize, out: &mut W) -> io::Result<()> {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = TreePrinter::new().write(node, depth, &mut text);
    out.write_all(text.as_bytes())
}

/// Returns the dump of `node` with the default configuration.
#[must_use]
pub fn dump(node: &Node) -> String {
    TreePrinter::new().render(node)
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::new().write(Some(self), 0, f)
    }
}
