//! Depth-first traversal.
//!
//! [`Walk`] visits a tree in pre-order using an explicit stack, so a
//! pathologically deep tree (a long chain of binary operators, say) costs
//! heap rather than call stack. Printing and the statistics below are built
//! on it.

use crate::ast::Node;
use crate::tag::Tag;
use hashbrown::HashMap;

/// Pre-order iterator over `(depth, node)` pairs, see [`Node::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Walk<'a> {
    /// Starts a walk at `root`, reporting it at `depth`.
    #[must_use]
    pub fn new(root: &'a Node, depth: usize) -> Self {
        Self {
            stack: vec![(depth, root)],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        let mark = self.stack.len();
        self.stack
            .extend(node.children().map(|child| (depth + 1, child)));
        // Children were pushed in order; the first one must be popped first.
        self.stack[mark..].reverse();
        Some((depth, node))
    }
}

impl Node {
    /// Visits this node and all of its descendants in pre-order.
    ///
    /// The root is at depth 0. List children come in append order, fixed
    /// children in slot order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minigo_ast::{Node, Tag};
    ///
    /// let expr = Node::binary_op("+", Node::identifier("x"), Node::int_literal(5));
    /// let visited: Vec<(usize, Tag)> = expr.walk().map(|(d, n)| (d, n.tag())).collect();
    ///
    /// assert_eq!(
    ///     visited,
    ///     vec![(0, Tag::BinaryOp), (1, Tag::Identifier), (1, Tag::IntLiteral)]
    /// );
    /// ```
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self, 0)
    }

    /// Counts the nodes in this subtree, including itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Counts the nodes in this subtree per form.
    #[must_use]
    pub fn census(&self) -> HashMap<Tag, usize> {
        let mut counts = HashMap::new();
        for (_, node) in self.walk() {
            *counts.entry(node.tag()).or_insert(0) += 1;
        }
        counts
    }
}
