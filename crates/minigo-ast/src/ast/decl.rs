//! Program structure constructors.
//!
//! A `MiniGo` source file is a package clause followed by top-level
//! declarations:
//!
//! ```text
//! package main
//!
//! func add(a int, b int) {
//!     return a + b
//! }
//! ```

use super::{Node, NodeKind, NodeList};

impl Node {
    /// Creates the root of a compilation unit.
    ///
    /// `declarations` is conventionally a `Block` holding the top-level
    /// declarations in source order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minigo_ast::{Node, Tag};
    ///
    /// let program = Node::program(Node::package_decl("main"), Node::block());
    /// let tags: Vec<Tag> = program.children().map(Node::tag).collect();
    /// assert_eq!(tags, vec![Tag::PackageDecl, Tag::Block]);
    /// ```
    #[must_use]
    pub fn program(package: Node, declarations: Node) -> Self {
        Self::new(NodeKind::Program {
            package: Box::new(package),
            declarations: Box::new(declarations),
        })
    }

    /// Creates a package clause: `package name`.
    #[must_use]
    pub fn package_decl(name: impl Into<String>) -> Self {
        Self::new(NodeKind::PackageDecl { name: name.into() })
    }

    /// Creates a function declaration from its `ParameterList` and body `Block`.
    #[must_use]
    pub fn function_decl(name: impl Into<String>, params: Node, body: Node) -> Self {
        Self::new(NodeKind::FunctionDecl {
            name: name.into(),
            params: Box::new(params),
            body: Box::new(body),
        })
    }

    /// Creates a parameter. A declared type name becomes an `Identifier` child.
    ///
    /// # Examples
    ///
    /// ```
    /// use minigo_ast::{Node, Tag};
    ///
    /// let param = Node::parameter("count", Some("int"));
    /// assert_eq!(param.text(), Some("count"));
    ///
    /// let ty = param.slots()[0].unwrap();
    /// assert_eq!(ty.tag(), Tag::Identifier);
    /// assert_eq!(ty.text(), Some("int"));
    /// ```
    #[must_use]
    pub fn parameter(name: impl Into<String>, ty: Option<&str>) -> Self {
        Self::new(NodeKind::Parameter {
            name: name.into(),
            ty: ty.map(|ty| Box::new(Node::identifier(ty))),
        })
    }

    /// Creates an empty parameter list.
    #[must_use]
    pub fn parameter_list() -> Self {
        Self::new(NodeKind::ParameterList(NodeList::new()))
    }
}
