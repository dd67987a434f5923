//! Child sequences for the variadic forms.
//!
//! `ParameterList`, `Block` and `ArgList` keep their children in a
//! [`NodeList`]. Appending is the only way a tree changes after it is built.
//! The first append reserves a small form-specific capacity (4 for parameter
//! and argument lists, 8 for blocks); after that the capacity doubles
//! whenever it runs out, so `n` appends cost `O(n)` in total.

use super::Node;
use crate::error::{AstError, AstResult};
use crate::span::Located;
use crate::tag::Tag;
use minigo_log::trace;
use std::ops::Index;

/// Ordered, gap-free sequence of owned child nodes.
///
/// Nothing is allocated until the first child arrives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeList {
    items: Vec<Node>,
}

impl NodeList {
    /// Creates an empty list without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no child was appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of children the list can hold before it grows again.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the child at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    /// Iterates the children in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }

    /// Views the children as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Node] {
        &self.items
    }

    /// Appends `child` to a list owned by a node of form `owner`, reserving
    /// `initial` slots on first use and doubling after that.
    pub(crate) fn push(&mut self, owner: Tag, initial: usize, child: Node) {
        let capacity = self.items.capacity();
        if self.items.len() == capacity {
            let grown = if capacity == 0 { initial } else { capacity * 2 };
            self.items.reserve_exact(grown - self.items.len());
            trace!("{owner} list grew from {capacity} to {grown} slots");
        }
        self.items.push(child);
    }

    pub(crate) fn into_vec(self) -> Vec<Node> {
        self.items
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.items.iter_mut()
    }

    /// A list of the same length and capacity holding `NilLiteral`s.
    pub(crate) fn placeholders(&self) -> Self {
        let mut items = Vec::with_capacity(self.items.capacity());
        items.resize_with(self.items.len(), Node::nil_literal);
        Self { items }
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Index<usize> for NodeList {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.items[index]
    }
}

impl Node {
    /// Appends `child` to the child sequence of a list form.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::NotAList`] if this form has no child sequence.
    /// The error hands the child back, see [`AstError::into_child`].
    ///
    /// # Examples
    ///
    /// ```
    /// use minigo_ast::Node;
    ///
    /// let mut args = Node::arg_list();
    /// args.append(Node::int_literal(1)).unwrap();
    /// args.append(Node::string_literal("two")).unwrap();
    /// assert_eq!(args.list().unwrap().len(), 2);
    ///
    /// let mut leaf = Node::identifier("x");
    /// let err = leaf.append(Node::string_literal("kept")).unwrap_err();
    /// assert_eq!(err.into_child().text(), Some("kept"));
    /// ```
    pub fn append(&mut self, child: Node) -> AstResult<()> {
        let tag = self.tag();
        let line = self.line();
        match (tag.initial_capacity(), self.list_mut()) {
            (Some(initial), Some(list)) => {
                list.push(tag, initial, child);
                Ok(())
            }
            _ => Err(AstError::NotAList {
                tag,
                line,
                child: Box::new(child),
            }),
        }
    }

    /// Appends a statement to a `Block`.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::WrongList`] unless this node is a `Block`.
    pub fn add_statement(&mut self, stmt: Node) -> AstResult<()> {
        self.append_to(Tag::Block, stmt)
    }

    /// Appends a parameter to a `ParameterList`.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::WrongList`] unless this node is a `ParameterList`.
    pub fn add_parameter(&mut self, param: Node) -> AstResult<()> {
        self.append_to(Tag::ParameterList, param)
    }

    /// Appends an argument to an `ArgList`.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::WrongList`] unless this node is an `ArgList`.
    pub fn add_argument(&mut self, arg: Node) -> AstResult<()> {
        self.append_to(Tag::ArgList, arg)
    }

    fn append_to(&mut self, expected: Tag, child: Node) -> AstResult<()> {
        let found = self.tag();
        if found != expected {
            return Err(AstError::WrongList {
                expected,
                found,
                line: self.line(),
                child: Box::new(child),
            });
        }
        self.append(child)
    }
}

/// Appends `child` to `parent`, doing nothing if either is absent.
///
/// This is the form recursive builders use when a sub-parse may have
/// produced nothing.
///
/// # Errors
///
/// Returns [`AstError::NotAList`] if both are present and `parent` has no
/// child sequence.
pub fn append_child(parent: Option<&mut Node>, child: Option<Node>) -> AstResult<()> {
    match (parent, child) {
        (Some(parent), Some(child)) => parent.append(child),
        _ => Ok(()),
    }
}
