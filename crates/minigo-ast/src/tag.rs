//! Node tags and their display names.
//!
//! A [`Tag`] is the fieldless discriminant of a [`NodeKind`](crate::ast::NodeKind).
//! Diagnostics use it to name a construct without holding on to the node.
//! Every `match` on `Tag` in this crate is exhaustive, so adding a form
//! refuses to compile until printing, teardown and naming all handle it.

use std::fmt;

/// The syntactic form of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    // ===== Program structure =====
    /// Whole compilation unit
    Program,
    /// `package main`
    PackageDecl,
    /// `func name(params) { body }`
    FunctionDecl,
    /// `name type` inside a parameter list
    Parameter,
    /// `(a int, b int)`
    ParameterList,

    // ===== Statements =====
    /// `{ stmts }`
    Block,
    /// `var x int = expr`
    VarDecl,
    /// `x = expr`
    Assignment,
    /// `x := expr`
    DeclAssignment,
    /// `if cond { } else { }`
    If,
    /// `for init; cond; update { }`
    For,
    /// `return expr`
    Return,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// Expression evaluated for its effect
    ExprStmt,

    // ===== Expressions =====
    /// `left op right`
    BinaryOp,
    /// `op operand`
    UnaryOp,
    /// `name(args)`
    FunctionCall,
    /// `x`
    Identifier,
    /// `42`
    IntLiteral,
    /// `3.14`
    FloatLiteral,
    /// `"text"`
    StringLiteral,
    /// `true` / `false`
    BoolLiteral,
    /// `nil`
    NilLiteral,
    /// `(a, b)` at a call site
    ArgList,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 25] = [
        Tag::Program,
        Tag::PackageDecl,
        Tag::FunctionDecl,
        Tag::Parameter,
        Tag::ParameterList,
        Tag::Block,
        Tag::VarDecl,
        Tag::Assignment,
        Tag::DeclAssignment,
        Tag::If,
        Tag::For,
        Tag::Return,
        Tag::Break,
        Tag::Continue,
        Tag::ExprStmt,
        Tag::BinaryOp,
        Tag::UnaryOp,
        Tag::FunctionCall,
        Tag::Identifier,
        Tag::IntLiteral,
        Tag::FloatLiteral,
        Tag::StringLiteral,
        Tag::BoolLiteral,
        Tag::NilLiteral,
        Tag::ArgList,
    ];

    /// Returns the stable display name used in tree dumps and diagnostics.
    ///
    /// ```
    /// use minigo_ast::Tag;
    ///
    /// assert_eq!(Tag::If.name(), "IfStmt");
    /// assert_eq!(Tag::ArgList.name(), "ArgList");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Program => "Program",
            Tag::PackageDecl => "PackageDecl",
            Tag::FunctionDecl => "FunctionDecl",
            Tag::Parameter => "Parameter",
            Tag::ParameterList => "ParameterList",
            Tag::Block => "Block",
            Tag::VarDecl => "VarDecl",
            Tag::Assignment => "Assignment",
            Tag::DeclAssignment => "DeclAssignment",
            Tag::If => "IfStmt",
            Tag::For => "ForStmt",
            Tag::Return => "ReturnStmt",
            Tag::Break => "BreakStmt",
            Tag::Continue => "ContinueStmt",
            Tag::ExprStmt => "ExprStmt",
            Tag::BinaryOp => "BinaryOp",
            Tag::UnaryOp => "UnaryOp",
            Tag::FunctionCall => "FunctionCall",
            Tag::Identifier => "Identifier",
            Tag::IntLiteral => "IntLiteral",
            Tag::FloatLiteral => "FloatLiteral",
            Tag::StringLiteral => "StringLiteral",
            Tag::BoolLiteral => "BoolLiteral",
            Tag::NilLiteral => "NilLiteral",
            Tag::ArgList => "ArgList",
        }
    }

    /// Returns `true` for the forms that hold their children in a
    /// [`NodeList`](crate::ast::NodeList).
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Tag::ParameterList | Tag::Block | Tag::ArgList)
    }

    /// Capacity reserved by the first append to a list of this form.
    ///
    /// Returns `None` for forms without a child sequence.
    #[must_use]
    pub const fn initial_capacity(self) -> Option<usize> {
        match self {
            Tag::ParameterList | Tag::ArgList => Some(4),
            Tag::Block => Some(8),
            Tag::Program
            | Tag::PackageDecl
            | Tag::FunctionDecl
            | Tag::Parameter
            | Tag::VarDecl
            | Tag::Assignment
            | Tag::DeclAssignment
            | Tag::If
            | Tag::For
            | Tag::Return
            | Tag::Break
            | Tag::Continue
            | Tag::ExprStmt
            | Tag::BinaryOp
            | Tag::UnaryOp
            | Tag::FunctionCall
            | Tag::Identifier
            | Tag::IntLiteral
            | Tag::FloatLiteral
            | Tag::StringLiteral
            | Tag::BoolLiteral
            | Tag::NilLiteral => None,
        }
    }

    /// Returns `true` for the forms whose payload is owned text.
    #[must_use]
    pub const fn carries_text(self) -> bool {
        match self {
            Tag::PackageDecl
            | Tag::FunctionDecl
            | Tag::Parameter
            | Tag::VarDecl
            | Tag::BinaryOp
            | Tag::UnaryOp
            | Tag::FunctionCall
            | Tag::Identifier
            | Tag::StringLiteral => true,
            Tag::Program
            | Tag::ParameterList
            | Tag::Block
            | Tag::Assignment
            | Tag::DeclAssignment
            | Tag::If
            | Tag::For
            | Tag::Return
            | Tag::Break
            | Tag::Continue
            | Tag::ExprStmt
            | Tag::IntLiteral
            | Tag::FloatLiteral
            | Tag::BoolLiteral
            | Tag::NilLiteral
            | Tag::ArgList => false,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
