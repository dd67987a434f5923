//! Statement constructors.

use super::{Node, NodeKind, NodeList};

impl Node {
    /// Creates an empty block.
    #[must_use]
    pub fn block() -> Self {
        Self::new(NodeKind::Block(NodeList::new()))
    }

    /// Creates `var name ty = init`. Both the type and initializer may be
    /// omitted; a type name becomes an `Identifier` child.
    #[must_use]
    pub fn var_decl(name: impl Into<String>, ty: Option<&str>, init: Option<Node>) -> Self {
        Self::new(NodeKind::VarDecl {
            name: name.into(),
            init: init.map(Box::new),
            ty: ty.map(|ty| Box::new(Node::identifier(ty))),
        })
    }

    /// Creates `name = value`.
    #[must_use]
    pub fn assignment(name: &str, value: Node) -> Self {
        Self::new(NodeKind::Assignment {
            target: Box::new(Node::identifier(name)),
            value: Box::new(value),
        })
    }

    /// Creates `name := value`.
    #[must_use]
    pub fn decl_assignment(name: &str, value: Node) -> Self {
        Self::new(NodeKind::DeclAssignment {
            target: Box::new(Node::identifier(name)),
            value: Box::new(value),
        })
    }

    /// Creates an `if` statement.
    ///
    /// Pass another `if` as `else_branch` to build an `else if` chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use minigo_ast::Node;
    ///
    /// let inner = Node::if_stmt(Node::identifier("b"), Node::block(), None);
    /// let outer = Node::if_stmt(Node::identifier("a"), Node::block(), Some(inner));
    ///
    /// assert!(outer.else_if().is_some());
    /// ```
    #[must_use]
    pub fn if_stmt(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Self {
        Self::new(NodeKind::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        })
    }

    /// Returns the nested `if` of an `else if`, if this is such a chain.
    #[must_use]
    pub fn else_if(&self) -> Option<&Node> {
        match &self.kind {
            NodeKind::If {
                else_branch: Some(alternative),
                ..
            } if matches!(alternative.kind, NodeKind::If { .. }) => Some(&**alternative),
            _ => None,
        }
    }

    /// Creates a `for` loop. Any of the clauses may be absent.
    #[must_use]
    pub fn for_stmt(
        init: Option<Node>,
        condition: Option<Node>,
        update: Option<Node>,
        body: Node,
    ) -> Self {
        Self::new(NodeKind::For {
            init: init.map(Box::new),
            condition: condition.map(Box::new),
            update: update.map(Box::new),
            body: Box::new(body),
        })
    }

    /// Creates `return` or `return value`.
    #[must_use]
    pub fn return_stmt(value: Option<Node>) -> Self {
        Self::new(NodeKind::Return {
            value: value.map(Box::new),
        })
    }

    /// Creates `break`.
    #[must_use]
    pub const fn break_stmt() -> Self {
        Self::new(NodeKind::Break)
    }

    /// Creates `continue`.
    #[must_use]
    pub const fn continue_stmt() -> Self {
        Self::new(NodeKind::Continue)
    }

    /// Wraps an expression used as a statement.
    #[must_use]
    pub fn expr_stmt(expr: Node) -> Self {
        Self::new(NodeKind::ExprStmt {
            expr: Box::new(expr),
        })
    }
}
