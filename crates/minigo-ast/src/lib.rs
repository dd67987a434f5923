//! `MiniGo` AST: the syntax tree shared by every compiler phase.
//!
//! This crate defines the node type the parser builds and the later phases
//! (type checking, code generation) consume, together with the operations
//! every phase needs on it:
//! - Construction, one constructor per syntactic form
//! - Appending to the child lists of blocks, parameter lists and argument lists
//! - Depth-first traversal and indented dumps
//! - Teardown
//!
//! It does not lex, parse, or check anything.
//!
//! # Modules
//!
//! - [`ast`] - Node model and constructors
//! - [`tag`] - Node tags and their display names
//! - [`span`] - Source line tracking
//! - [`walk`] - Depth-first traversal
//! - [`pretty`] - Tree dumps
//! - [`teardown`] - Releasing trees
//! - [`error`] - Construction errors
//!
//! # Examples
//!
//! ## Building and dumping an expression
//!
//! ```
//! use minigo_ast::Node;
//!
//! let sum = Node::binary_op("+", Node::identifier("x"), Node::int_literal(5));
//! assert_eq!(sum.to_string(), "BinaryOp: +\n  Identifier: x\n  IntLiteral: 5\n");
//! ```
//!
//! ## Growing a list
//!
//! ```
//! use minigo_ast::{Node, Tag};
//!
//! let mut params = Node::parameter_list();
//! params.add_parameter(Node::parameter("a", Some("int"))).unwrap();
//! params.add_parameter(Node::parameter("b", Some("string"))).unwrap();
//!
//! let names: Vec<&str> = params.children().filter_map(Node::text).collect();
//! assert_eq!(names, ["a", "b"]);
//! ```
//!
//! ## Tearing down
//!
//! ```
//! use minigo_ast::Node;
//!
//! let program = Node::program(Node::package_decl("main"), Node::block());
//! assert_eq!(program.free(), 3);
//! ```

#![warn(missing_docs)]

pub mod ast;
pub mod error;
pub mod pretty;
pub mod span;
pub mod tag;
pub mod teardown;
pub mod walk;

pub use ast::{Children, Node, NodeKind, NodeList, Payload, append_child};
pub use error::{AstError, AstResult};
pub use pretty::{PrintConfig, TreePrinter, dump, print};
pub use span::{Line, Located};
pub use tag::Tag;
pub use teardown::free;
pub use walk::Walk;
