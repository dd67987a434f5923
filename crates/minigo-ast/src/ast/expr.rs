//! Expression constructors.
//!
//! Operator symbols are kept as the text the parser saw (`+`, `<=`, `&&`,
//! `!`); this layer does not interpret them.

use super::{Node, NodeKind, NodeList};

impl Node {
    /// Creates `left op right`.
    #[must_use]
    pub fn binary_op(op: impl Into<String>, left: Node, right: Node) -> Self {
        Self::new(NodeKind::BinaryOp {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Creates `op operand`.
    #[must_use]
    pub fn unary_op(op: impl Into<String>, operand: Node) -> Self {
        Self::new(NodeKind::UnaryOp {
            op: op.into(),
            operand: Box::new(operand),
        })
    }

    /// Creates a call of the named function with an `ArgList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minigo_ast::Node;
    ///
    /// let mut args = Node::arg_list();
    /// args.add_argument(Node::string_literal("hi")).unwrap();
    /// let call = Node::function_call("println", args);
    ///
    /// assert_eq!(call.text(), Some("println"));
    /// assert_eq!(call.slots()[0].unwrap().list().unwrap().len(), 1);
    /// ```
    #[must_use]
    pub fn function_call(name: impl Into<String>, args: Node) -> Self {
        Self::new(NodeKind::FunctionCall {
            name: name.into(),
            args: Box::new(args),
        })
    }

    /// Creates a name reference.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Identifier { name: name.into() })
    }

    /// Creates an integer literal.
    #[must_use]
    pub const fn int_literal(value: i64) -> Self {
        Self::new(NodeKind::IntLiteral { value })
    }

    /// Creates a floating-point literal.
    #[must_use]
    pub const fn float_literal(value: f64) -> Self {
        Self::new(NodeKind::FloatLiteral { value })
    }

    /// Creates a string literal from its unquoted contents.
    #[must_use]
    pub fn string_literal(value: impl Into<String>) -> Self {
        Self::new(NodeKind::StringLiteral {
            value: value.into(),
        })
    }

    /// Creates `true` or `false`.
    #[must_use]
    pub const fn bool_literal(value: bool) -> Self {
        Self::new(NodeKind::BoolLiteral { value })
    }

    /// Creates `nil`.
    #[must_use]
    pub const fn nil_literal() -> Self {
        Self::new(NodeKind::NilLiteral)
    }

    /// Creates an empty argument list.
    #[must_use]
    pub fn arg_list() -> Self {
        Self::new(NodeKind::ArgList(NodeList::new()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Node, Payload, Tag};

    #[test]
    fn test_binary_op_operands() {
        let sum = Node::binary_op("+", Node::identifier("x"), Node::int_literal(5));
        let [left, right, ..] = sum.slots();

        assert_eq!(sum.text(), Some("+"));
        assert_eq!(left.unwrap().text(), Some("x"));
        assert_eq!(right.unwrap().payload(), Some(Payload::Int(5)));
    }

    #[test]
    fn test_unary_op_operand() {
        let neg = Node::unary_op("!", Node::bool_literal(false));
        let operands: Vec<Tag> = neg.children().map(Node::tag).collect();

        assert_eq!(neg.payload(), Some(Payload::Text("!")));
        assert_eq!(operands, vec![Tag::BoolLiteral]);
    }

    #[test]
    fn test_literal_payloads() {
        assert_eq!(Node::int_literal(i64::MAX).payload(), Some(Payload::Int(i64::MAX)));
        assert_eq!(Node::float_literal(0.25).payload(), Some(Payload::Float(0.25)));
        assert_eq!(
            Node::string_literal("hello").payload(),
            Some(Payload::Text("hello"))
        );
        assert_eq!(Node::bool_literal(true).payload(), Some(Payload::Bool(true)));
        assert_eq!(Node::nil_literal().payload(), None);
    }

    #[test]
    fn test_operator_text_is_owned() {
        let op = String::from("<=");
        let cmp = Node::binary_op(op.as_str(), Node::int_literal(1), Node::int_literal(2));
        drop(op);

        assert_eq!(cmp.text(), Some("<="));
    }

    #[test]
    fn test_literals_are_leaves() {
        for leaf in [
            Node::identifier("x"),
            Node::int_literal(1),
            Node::float_literal(1.0),
            Node::string_literal(""),
            Node::bool_literal(true),
            Node::nil_literal(),
            Node::arg_list(),
        ] {
            assert!(leaf.is_leaf(), "{}", leaf.tag());
        }
    }
}
