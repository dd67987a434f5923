//! Releasing trees.
//!
//! Dropping a [`Node`] releases its whole subtree: the payload text first,
//! then every child in order, then the node itself. The release loop keeps
//! its own work list instead of recursing, so dropping a tree thousands of
//! levels deep is safe.
//!
//! [`free`] is the explicit form of the same operation. It consumes the
//! root, so freeing a tree twice or using it afterwards does not compile.

use crate::ast::{Node, NodeKind};
use minigo_log::debug;
use std::mem;

impl NodeKind {
    /// Empties this kind in place and returns its former children in
    /// traversal order. Payload text is released before returning.
    fn take_children(&mut self) -> Vec<Node> {
        match mem::replace(self, NodeKind::NilLiteral) {
            NodeKind::Program {
                package,
                declarations,
            } => vec![*package, *declarations],
            NodeKind::FunctionDecl { params, body, .. } => vec![*params, *body],
            NodeKind::Parameter { ty, .. } => ty.into_iter().map(|ty| *ty).collect(),
            NodeKind::ParameterList(list) | NodeKind::Block(list) | NodeKind::ArgList(list) => {
                list.into_vec()
            }
            NodeKind::VarDecl { init, ty, .. } => {
                [init, ty].into_iter().flatten().map(|node| *node).collect()
            }
            NodeKind::Assignment { target, value }
            | NodeKind::DeclAssignment { target, value } => vec![*target, *value],
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let mut children = vec![*condition, *then_branch];
                children.extend(else_branch.map(|node| *node));
                children
            }
            NodeKind::For {
                init,
                condition,
                update,
                body,
            } => {
                let mut children: Vec<Node> = [init, condition, update]
                    .into_iter()
                    .flatten()
                    .map(|node| *node)
                    .collect();
                children.push(*body);
                children
            }
            NodeKind::Return { value } => value.into_iter().map(|node| *node).collect(),
            NodeKind::ExprStmt { expr } => vec![*expr],
            NodeKind::BinaryOp { left, right, .. } => vec![*left, *right],
            NodeKind::UnaryOp { operand, .. } => vec![*operand],
            NodeKind::FunctionCall { args, .. } => vec![*args],
            NodeKind::PackageDecl { .. }
            | NodeKind::Break
            | NodeKind::Continue
            | NodeKind::Identifier { .. }
            | NodeKind::IntLiteral { .. }
            | NodeKind::FloatLiteral { .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::BoolLiteral { .. }
            | NodeKind::NilLiteral => Vec::new(),
        }
    }
}

/// Releases every descendant of `kind`, leaving it childless.
///
/// Returns the number of descendant nodes released.
fn release_descendants(kind: &mut NodeKind) -> usize {
    let mut released = 0;
    let mut pending = kind.take_children();
    pending.reverse();

    while let Some(mut node) = pending.pop() {
        let mark = pending.len();
        pending.extend(node.kind.take_children());
        pending[mark..].reverse();
        released += 1;
        // `node` is childless now; dropping it frees only its own storage.
    }
    released
}

impl Drop for Node {
    fn drop(&mut self) {
        release_descendants(&mut self.kind);
    }
}

/// Tears down a tree, returning how many nodes were released.
///
/// An absent tree is a no-op that releases nothing.
///
/// # Examples
///
/// ```
/// use minigo_ast::{free, Node};
///
/// let tree = Node::binary_op("+", Node::identifier("x"), Node::int_literal(5));
/// assert_eq!(free(Some(tree)), 3);
/// assert_eq!(free(None), 0);
/// ```
pub fn free(node: Option<Node>) -> usize {
    let Some(mut root) = node else {
        return 0;
    };

    let tag = root.tag();
    let released = release_descendants(&mut root.kind) + 1;
    drop(root);

    debug!("released {tag} tree of {released} nodes");
    released
}

impl Node {
    /// Tears down this tree, see [`free`].
    pub fn free(self) -> usize {
        free(Some(self))
    }
}
