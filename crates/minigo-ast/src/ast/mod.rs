//! Abstract Syntax Tree (AST) for the `MiniGo` language.
//!
//! Every construct is a [`Node`]: a [`NodeKind`] plus the source line it
//! started on. `NodeKind` is a sum type, so a node only has the fields its
//! form needs. An `If` holds a condition, a then-branch and an optional
//! else-branch by name. A `Block` holds a [`NodeList`]. A literal holds its
//! value.
//!
//! # Ownership
//!
//! Each node owns its children outright (`Box<Node>` for fixed positions,
//! [`NodeList`] for sequences). The tree is therefore acyclic by
//! construction and every subtree has exactly one owner. Text payloads are
//! `String`s copied from the caller, never borrowed from the source buffer.
//!
//! # Modules
//!
//! - [`decl`] - Program structure constructors (program, package, functions, parameters)
//! - [`stmt`] - Statement constructors (blocks, bindings, control flow)
//! - [`expr`] - Expression constructors (operators, calls, literals)
//! - [`list`] - The child sequence used by variadic forms, and appending to it

pub mod decl;
pub mod expr;
pub mod list;
pub mod stmt;

pub use list::{NodeList, append_child};

use crate::span::{Line, Located};
use crate::tag::Tag;
use std::fmt;

/// A single node of the syntax tree.
///
/// # Examples
///
/// ```
/// use minigo_ast::{Node, Payload, Tag};
///
/// let sum = Node::binary_op("+", Node::identifier("x"), Node::int_literal(5));
///
/// assert_eq!(sum.tag(), Tag::BinaryOp);
/// assert_eq!(sum.payload(), Some(Payload::Text("+")));
/// assert_eq!(sum.children().count(), 2);
/// ```
///
/// `Clone`, `PartialEq` and `Debug` keep their own work lists instead of
/// recursing, like [`Drop`](crate::teardown), so they handle trees of any
/// depth.
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) line: Line,
}

/// The form of a node together with the data that form carries.
///
/// Optional positions are `Option<Box<Node>>`; positions the grammar always
/// fills are `Box<Node>`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    // ===== Program structure =====

    /// Compilation unit: package clause followed by the top-level declarations.
    Program {
        /// The `PackageDecl`
        package: Box<Node>,
        /// Top-level declarations, conventionally a `Block`
        declarations: Box<Node>,
    },

    /// Package clause: `package main`
    PackageDecl {
        /// Package name
        name: String,
    },

    /// Function declaration: `func add(a int, b int) { ... }`
    FunctionDecl {
        /// Function name
        name: String,
        /// The `ParameterList`
        params: Box<Node>,
        /// The body `Block`
        body: Box<Node>,
    },

    /// A single parameter: `a int`
    Parameter {
        /// Parameter name
        name: String,
        /// Declared type, as an `Identifier`
        ty: Option<Box<Node>>,
    },

    /// Parenthesised parameters of a function declaration.
    ParameterList(NodeList),

    // ===== Statements =====

    /// Statement sequence: `{ ... }`
    Block(NodeList),

    /// Variable declaration: `var x int = expr`
    VarDecl {
        /// Variable name
        name: String,
        /// Optional initializer
        init: Option<Box<Node>>,
        /// Optional declared type, as an `Identifier`
        ty: Option<Box<Node>>,
    },

    /// Assignment: `x = expr`
    Assignment {
        /// Assigned variable, as an `Identifier`
        target: Box<Node>,
        /// Assigned value
        value: Box<Node>,
    },

    /// Short variable declaration: `x := expr`
    DeclAssignment {
        /// Declared variable, as an `Identifier`
        target: Box<Node>,
        /// Initial value
        value: Box<Node>,
    },

    /// Conditional: `if cond { ... } else { ... }`
    ///
    /// An `else if` is an `If` in the `else_branch` position.
    If {
        /// Condition
        condition: Box<Node>,
        /// Taken when the condition holds
        then_branch: Box<Node>,
        /// Optional alternative
        else_branch: Option<Box<Node>>,
    },

    /// Loop: `for init; cond; update { ... }`
    For {
        /// Optional init statement
        init: Option<Box<Node>>,
        /// Optional condition (absent loops forever)
        condition: Option<Box<Node>>,
        /// Optional post statement
        update: Option<Box<Node>>,
        /// Loop body
        body: Box<Node>,
    },

    /// Return: `return` or `return expr`
    Return {
        /// Optional returned value
        value: Option<Box<Node>>,
    },

    /// `break`
    Break,

    /// `continue`
    Continue,

    /// Expression evaluated for its side effects.
    ExprStmt {
        /// The expression
        expr: Box<Node>,
    },

    // ===== Expressions =====

    /// Binary operation: `left op right`
    BinaryOp {
        /// Operator symbol, e.g. `+` or `&&`
        op: String,
        /// Left operand
        left: Box<Node>,
        /// Right operand
        right: Box<Node>,
    },

    /// Unary operation: `op operand`
    UnaryOp {
        /// Operator symbol, e.g. `-` or `!`
        op: String,
        /// Operand
        operand: Box<Node>,
    },

    /// Call of a named function: `name(args)`
    FunctionCall {
        /// Callee name
        name: String,
        /// The `ArgList`
        args: Box<Node>,
    },

    /// Name reference: `x`
    Identifier {
        /// The name
        name: String,
    },

    /// Integer literal: `42`
    IntLiteral {
        /// The value
        value: i64,
    },

    /// Floating-point literal: `3.14`
    FloatLiteral {
        /// The value
        value: f64,
    },

    /// String literal: `"hello"`
    StringLiteral {
        /// The contents, without quotes
        value: String,
    },

    /// Boolean literal: `true` or `false`
    BoolLiteral {
        /// The value
        value: bool,
    },

    /// `nil`
    NilLiteral,

    /// Arguments of a call site.
    ArgList(NodeList),
}

impl NodeKind {
    /// Returns the tag of this form.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Program { .. } => Tag::Program,
            Self::PackageDecl { .. } => Tag::PackageDecl,
            Self::FunctionDecl { .. } => Tag::FunctionDecl,
            Self::Parameter { .. } => Tag::Parameter,
            Self::ParameterList(_) => Tag::ParameterList,
            Self::Block(_) => Tag::Block,
            Self::VarDecl { .. } => Tag::VarDecl,
            Self::Assignment { .. } => Tag::Assignment,
            Self::DeclAssignment { .. } => Tag::DeclAssignment,
            Self::If { .. } => Tag::If,
            Self::For { .. } => Tag::For,
            Self::Return { .. } => Tag::Return,
            Self::Break => Tag::Break,
            Self::Continue => Tag::Continue,
            Self::ExprStmt { .. } => Tag::ExprStmt,
            Self::BinaryOp { .. } => Tag::BinaryOp,
            Self::UnaryOp { .. } => Tag::UnaryOp,
            Self::FunctionCall { .. } => Tag::FunctionCall,
            Self::Identifier { .. } => Tag::Identifier,
            Self::IntLiteral { .. } => Tag::IntLiteral,
            Self::FloatLiteral { .. } => Tag::FloatLiteral,
            Self::StringLiteral { .. } => Tag::StringLiteral,
            Self::BoolLiteral { .. } => Tag::BoolLiteral,
            Self::NilLiteral => Tag::NilLiteral,
            Self::ArgList(_) => Tag::ArgList,
        }
    }
}

/// The scalar carried directly by a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    /// Names, operator symbols and string literal contents
    Text(&'a str),
    /// Integer literal value
    Int(i64),
    /// Float literal value
    Float(f64),
    /// Boolean literal value
    Bool(bool),
}

impl<'a> Payload<'a> {
    /// Returns the text, if this is a text payload.
    #[must_use]
    pub const fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(*text),
            _ => None,
        }
    }
}

/// Renders the payload the way tree dumps show it.
///
/// Floats use fixed-point notation with the formatter's precision, or six
/// digits when none is given.
impl fmt::Display for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => {
                let precision = f.precision().unwrap_or(6);
                write!(f, "{value:.precision$}")
            }
            Self::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
        }
    }
}

impl Node {
    /// Wraps a kind into a node at [`Line::UNKNOWN`].
    #[must_use]
    pub const fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            line: Line::UNKNOWN,
        }
    }

    /// Returns the node with its source line set.
    #[must_use]
    pub fn at_line(mut self, line: impl Into<Line>) -> Self {
        self.line = line.into();
        self
    }

    /// Sets the source line.
    pub fn set_line(&mut self, line: impl Into<Line>) {
        self.line = line.into();
    }

    /// Returns the form of this node.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.kind.tag()
    }

    /// Returns the form and its data.
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the scalar payload, if this form carries one.
    #[must_use]
    pub fn payload(&self) -> Option<Payload<'_>> {
        match &self.kind {
            NodeKind::PackageDecl { name }
            | NodeKind::FunctionDecl { name, .. }
            | NodeKind::Parameter { name, .. }
            | NodeKind::VarDecl { name, .. }
            | NodeKind::FunctionCall { name, .. }
            | NodeKind::Identifier { name } => Some(Payload::Text(name)),
            NodeKind::BinaryOp { op, .. } | NodeKind::UnaryOp { op, .. } => {
                Some(Payload::Text(op))
            }
            NodeKind::StringLiteral { value } => Some(Payload::Text(value)),
            NodeKind::IntLiteral { value } => Some(Payload::Int(*value)),
            NodeKind::FloatLiteral { value } => Some(Payload::Float(*value)),
            NodeKind::BoolLiteral { value } => Some(Payload::Bool(*value)),
            NodeKind::Program { .. }
            | NodeKind::ParameterList(_)
            | NodeKind::Block(_)
            | NodeKind::Assignment { .. }
            | NodeKind::DeclAssignment { .. }
            | NodeKind::If { .. }
            | NodeKind::For { .. }
            | NodeKind::Return { .. }
            | NodeKind::Break
            | NodeKind::Continue
            | NodeKind::ExprStmt { .. }
            | NodeKind::NilLiteral
            | NodeKind::ArgList(_) => None,
        }
    }

    /// Returns the text payload (names, operators, string contents).
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.payload().and_then(|payload| payload.as_text())
    }

    /// Returns the child sequence of a list form.
    #[must_use]
    pub const fn list(&self) -> Option<&NodeList> {
        match &self.kind {
            NodeKind::ParameterList(list) | NodeKind::Block(list) | NodeKind::ArgList(list) => {
                Some(list)
            }
            _ => None,
        }
    }

    pub(crate) fn list_mut(&mut self) -> Option<&mut NodeList> {
        match &mut self.kind {
            NodeKind::ParameterList(list) | NodeKind::Block(list) | NodeKind::ArgList(list) => {
                Some(list)
            }
            _ => None,
        }
    }

    /// Returns the four fixed child positions in slot order.
    ///
    /// Absent positions, and every position of a list form, are `None`.
    /// The order is the one printing and traversal use, e.g. condition,
    /// then-branch, else-branch for an `If`.
    #[must_use]
    pub fn slots(&self) -> [Option<&Node>; 4] {
        match &self.kind {
            NodeKind::Program {
                package,
                declarations,
            } => [Some(&**package), Some(&**declarations), None, None],
            NodeKind::FunctionDecl { params, body, .. } => [Some(&**params), Some(&**body), None, None],
            NodeKind::Parameter { ty, .. } => [ty.as_deref(), None, None, None],
            NodeKind::VarDecl { init, ty, .. } => [init.as_deref(), ty.as_deref(), None, None],
            NodeKind::Assignment { target, value }
            | NodeKind::DeclAssignment { target, value } => {
                [Some(&**target), Some(&**value), None, None]
            }
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => [
                Some(&**condition),
                Some(&**then_branch),
                else_branch.as_deref(),
                None,
            ],
            NodeKind::For {
                init,
                condition,
                update,
                body,
            } => [
                init.as_deref(),
                condition.as_deref(),
                update.as_deref(),
                Some(&**body),
            ],
            NodeKind::Return { value } => [value.as_deref(), None, None, None],
            NodeKind::ExprStmt { expr } => [Some(&**expr), None, None, None],
            NodeKind::BinaryOp { left, right, .. } => [Some(&**left), Some(&**right), None, None],
            NodeKind::UnaryOp { operand, .. } => [Some(&**operand), None, None, None],
            NodeKind::FunctionCall { args, .. } => [Some(&**args), None, None, None],
            NodeKind::PackageDecl { .. }
            | NodeKind::ParameterList(_)
            | NodeKind::Block(_)
            | NodeKind::Break
            | NodeKind::Continue
            | NodeKind::Identifier { .. }
            | NodeKind::IntLiteral { .. }
            | NodeKind::FloatLiteral { .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::BoolLiteral { .. }
            | NodeKind::NilLiteral
            | NodeKind::ArgList(_) => [None; 4],
        }
    }

    /// Iterates the children in traversal order.
    ///
    /// List forms yield their sequence in append order; every other form
    /// yields its present fixed positions in slot order.
    pub fn children(&self) -> Children<'_> {
        let inner = match self.list() {
            Some(list) => ChildrenInner::List(list.iter()),
            None => ChildrenInner::Slots(self.slots().into_iter()),
        };
        Children { inner }
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }
}

impl NodeKind {
    /// Copies the payload of this form and puts a `NilLiteral` in every
    /// present child position. List forms get one placeholder per child.
    fn shallow_copy(&self) -> Self {
        fn hole() -> Box<Node> {
            Box::new(Node::nil_literal())
        }
        fn hole_if(slot: &Option<Box<Node>>) -> Option<Box<Node>> {
            slot.as_ref().map(|_| hole())
        }

        match self {
            Self::Program { .. } => Self::Program {
                package: hole(),
                declarations: hole(),
            },
            Self::PackageDecl { name } => Self::PackageDecl { name: name.clone() },
            Self::FunctionDecl { name, .. } => Self::FunctionDecl {
                name: name.clone(),
                params: hole(),
                body: hole(),
            },
            Self::Parameter { name, ty } => Self::Parameter {
                name: name.clone(),
                ty: hole_if(ty),
            },
            Self::ParameterList(list) => Self::ParameterList(list.placeholders()),
            Self::Block(list) => Self::Block(list.placeholders()),
            Self::VarDecl { name, init, ty } => Self::VarDecl {
                name: name.clone(),
                init: hole_if(init),
                ty: hole_if(ty),
            },
            Self::Assignment { .. } => Self::Assignment {
                target: hole(),
                value: hole(),
            },
            Self::DeclAssignment { .. } => Self::DeclAssignment {
                target: hole(),
                value: hole(),
            },
            Self::If { else_branch, .. } => Self::If {
                condition: hole(),
                then_branch: hole(),
                else_branch: hole_if(else_branch),
            },
            Self::For {
                init,
                condition,
                update,
                ..
            } => Self::For {
                init: hole_if(init),
                condition: hole_if(condition),
                update: hole_if(update),
                body: hole(),
            },
            Self::Return { value } => Self::Return {
                value: hole_if(value),
            },
            Self::Break => Self::Break,
            Self::Continue => Self::Continue,
            Self::ExprStmt { .. } => Self::ExprStmt { expr: hole() },
            Self::BinaryOp { op, .. } => Self::BinaryOp {
                op: op.clone(),
                left: hole(),
                right: hole(),
            },
            Self::UnaryOp { op, .. } => Self::UnaryOp {
                op: op.clone(),
                operand: hole(),
            },
            Self::FunctionCall { name, .. } => Self::FunctionCall {
                name: name.clone(),
                args: hole(),
            },
            Self::Identifier { name } => Self::Identifier { name: name.clone() },
            Self::IntLiteral { value } => Self::IntLiteral { value: *value },
            Self::FloatLiteral { value } => Self::FloatLiteral { value: *value },
            Self::StringLiteral { value } => Self::StringLiteral {
                value: value.clone(),
            },
            Self::BoolLiteral { value } => Self::BoolLiteral { value: *value },
            Self::NilLiteral => Self::NilLiteral,
            Self::ArgList(list) => Self::ArgList(list.placeholders()),
        }
    }

    /// Mutable children in traversal order.
    fn children_mut(&mut self) -> Vec<&mut Node> {
        match self {
            Self::Program {
                package,
                declarations,
            } => vec![&mut **package, &mut **declarations],
            Self::FunctionDecl { params, body, .. } => vec![&mut **params, &mut **body],
            Self::Parameter { ty, .. } => ty.as_deref_mut().into_iter().collect(),
            Self::ParameterList(list) | Self::Block(list) | Self::ArgList(list) => {
                list.iter_mut().collect()
            }
            Self::VarDecl { init, ty, .. } => [init, ty]
                .into_iter()
                .flatten()
                .map(|node| &mut **node)
                .collect(),
            Self::Assignment { target, value } | Self::DeclAssignment { target, value } => {
                vec![&mut **target, &mut **value]
            }
            Self::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let mut children = vec![&mut **condition, &mut **then_branch];
                children.extend(else_branch.as_deref_mut());
                children
            }
            Self::For {
                init,
                condition,
                update,
                body,
            } => {
                let mut children: Vec<&mut Node> = [init, condition, update]
                    .into_iter()
                    .flatten()
                    .map(|node| &mut **node)
                    .collect();
                children.push(&mut **body);
                children
            }
            Self::Return { value } => value.as_deref_mut().into_iter().collect(),
            Self::ExprStmt { expr } => vec![&mut **expr],
            Self::BinaryOp { left, right, .. } => vec![&mut **left, &mut **right],
            Self::UnaryOp { operand, .. } => vec![&mut **operand],
            Self::FunctionCall { args, .. } => vec![&mut **args],
            Self::PackageDecl { .. }
            | Self::Break
            | Self::Continue
            | Self::Identifier { .. }
            | Self::IntLiteral { .. }
            | Self::FloatLiteral { .. }
            | Self::StringLiteral { .. }
            | Self::BoolLiteral { .. }
            | Self::NilLiteral => Vec::new(),
        }
    }
}

impl Node {
    /// Compares everything but the children themselves: line, form,
    /// payload and which child positions are filled.
    fn shallow_eq(&self, other: &Self) -> bool {
        self.line == other.line
            && self.tag() == other.tag()
            && self.payload() == other.payload()
            && self.list().map(NodeList::len) == other.list().map(NodeList::len)
            && self.slots().map(|slot| slot.is_some()) == other.slots().map(|slot| slot.is_some())
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut copy = Self {
            kind: self.kind.shallow_copy(),
            line: self.line,
        };

        let mut pending: Vec<(&Node, &mut Node)> =
            self.children().zip(copy.kind.children_mut()).collect();
        while let Some((source, target)) = pending.pop() {
            target.kind = source.kind.shallow_copy();
            target.line = source.line;
            pending.extend(source.children().zip(target.kind.children_mut()));
        }
        copy
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if !left.shallow_eq(right) {
                return false;
            }
            pending.extend(left.children().zip(right.children()));
        }
        true
    }
}

/// Lists the subtree in pre-order as `(depth, tag, payload, line)` entries.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = f.debug_list();
        for (depth, node) in self.walk() {
            nodes.entry(&(depth, node.tag(), node.payload(), node.line));
        }
        nodes.finish()
    }
}

impl From<NodeKind> for Node {
    fn from(kind: NodeKind) -> Self {
        Self::new(kind)
    }
}

impl Located for Node {
    fn line(&self) -> Line {
        self.line
    }
}

/// Iterator over the children of a [`Node`], see [`Node::children`].
pub struct Children<'a> {
    inner: ChildrenInner<'a>,
}

enum ChildrenInner<'a> {
    List(std::slice::Iter<'a, Node>),
    Slots(std::array::IntoIter<Option<&'a Node>, 4>),
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ChildrenInner::List(iter) => iter.next(),
            ChildrenInner::Slots(iter) => iter.find_map(|slot| slot),
        }
    }
}
