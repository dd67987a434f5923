//! Integration tests for building, traversing and dumping trees.
//!
//! Trees are built bottom-up the way a parser would: leaves first, then
//! operators, statements, declarations and finally the program root.

use hashbrown::HashSet;
use minigo_ast::{Node, NodeKind, Payload, Tag, TreePrinter, dump, print};

/// Builds one node of every form, wired into a single program.
///
/// ```text
/// package main
///
/// func pick(a int, b int, c string) {
///     var limit int = 3
///     total := a + b
///     total = -total
///     if total > limit { return "big" } else if ok { return 2.5 } else { return nil }
///     for i := 0; i < limit; i = i + 1 { continue }
///     for { break }
///     println(c, true)
/// }
/// ```
fn every_form() -> Node {
    let mut params = Node::parameter_list();
    params.add_parameter(Node::parameter("a", Some("int"))).unwrap();
    params.add_parameter(Node::parameter("b", Some("int"))).unwrap();
    params.add_parameter(Node::parameter("c", Some("string"))).unwrap();

    let mut body = Node::block();
    body.add_statement(Node::var_decl("limit", Some("int"), Some(Node::int_literal(3))))
        .unwrap();
    body.add_statement(Node::decl_assignment(
        "total",
        Node::binary_op("+", Node::identifier("a"), Node::identifier("b")),
    ))
    .unwrap();
    body.add_statement(Node::assignment(
        "total",
        Node::unary_op("-", Node::identifier("total")),
    ))
    .unwrap();

    let mut big = Node::block();
    big.add_statement(Node::return_stmt(Some(Node::string_literal("big"))))
        .unwrap();
    let mut middle = Node::block();
    middle
        .add_statement(Node::return_stmt(Some(Node::float_literal(2.5))))
        .unwrap();
    let mut small = Node::block();
    small
        .add_statement(Node::return_stmt(Some(Node::nil_literal())))
        .unwrap();
    body.add_statement(Node::if_stmt(
        Node::binary_op(">", Node::identifier("total"), Node::identifier("limit")),
        big,
        Some(Node::if_stmt(Node::identifier("ok"), middle, Some(small))),
    ))
    .unwrap();

    let mut loop_body = Node::block();
    loop_body.add_statement(Node::continue_stmt()).unwrap();
    body.add_statement(Node::for_stmt(
        Some(Node::decl_assignment("i", Node::int_literal(0))),
        Some(Node::binary_op("<", Node::identifier("i"), Node::identifier("limit"))),
        Some(Node::assignment(
            "i",
            Node::binary_op("+", Node::identifier("i"), Node::int_literal(1)),
        )),
        loop_body,
    ))
    .unwrap();

    let mut forever = Node::block();
    forever.add_statement(Node::break_stmt()).unwrap();
    body.add_statement(Node::for_stmt(None, None, None, forever))
        .unwrap();

    let mut args = Node::arg_list();
    args.add_argument(Node::identifier("c")).unwrap();
    args.add_argument(Node::bool_literal(true)).unwrap();
    body.add_statement(Node::expr_stmt(Node::function_call("println", args)))
        .unwrap();

    let mut decls = Node::block();
    decls
        .add_statement(Node::function_decl("pick", params, body))
        .unwrap();

    Node::program(Node::package_decl("main"), decls)
}

#[test]
fn test_binary_op_scenario() {
    let sum = Node::binary_op("+", Node::identifier("x"), Node::int_literal(5));

    assert_eq!(dump(&sum), "BinaryOp: +\n  Identifier: x\n  IntLiteral: 5\n");
}

#[test]
fn test_parameter_list_scenario() {
    let mut params = Node::parameter_list();
    assert!(params.list().unwrap().is_empty());

    for (name, ty) in [("a", "int"), ("b", "int"), ("c", "string")] {
        params.add_parameter(Node::parameter(name, Some(ty))).unwrap();
    }

    let seen: Vec<(&str, &str)> = params
        .children()
        .map(|param| {
            let ty = param.slots()[0].and_then(Node::text).unwrap();
            (param.text().unwrap(), ty)
        })
        .collect();
    assert_eq!(seen, vec![("a", "int"), ("b", "int"), ("c", "string")]);
}

#[test]
fn test_if_else_scenario() {
    let mut then_block = Node::block();
    then_block
        .add_statement(Node::return_stmt(Some(Node::int_literal(1))))
        .unwrap();
    let mut else_block = Node::block();
    else_block
        .add_statement(Node::return_stmt(Some(Node::int_literal(0))))
        .unwrap();

    let stmt = Node::if_stmt(Node::bool_literal(true), then_block, Some(else_block));

    let else_branch = stmt.slots()[2].expect("else branch present");
    assert_eq!(else_branch.tag(), Tag::Block);

    let children: Vec<&Node> = stmt.children().collect();
    assert_eq!(children.len(), 3);
    assert!(std::ptr::eq(children[2], else_branch));

    assert_eq!(
        dump(&stmt),
        "IfStmt\n\
         \x20 BoolLiteral: true\n\
         \x20 Block\n\
         \x20   ReturnStmt\n\
         \x20     IntLiteral: 1\n\
         \x20 Block\n\
         \x20   ReturnStmt\n\
         \x20     IntLiteral: 0\n"
    );
}

#[test]
fn test_for_with_only_body_scenario() {
    let mut body = Node::block();
    body.add_statement(Node::break_stmt()).unwrap();
    let stmt = Node::for_stmt(None, None, None, body);

    let [init, condition, update, body] = stmt.slots();
    assert!(init.is_none() && condition.is_none() && update.is_none());
    assert_eq!(body.map(Node::tag), Some(Tag::Block));

    assert_eq!(dump(&stmt), "ForStmt\n  Block\n    BreakStmt\n");
}

#[test]
fn test_else_if_chain_is_nested_if() {
    let tree = every_form();
    let if_stmt = tree
        .walk()
        .map(|(_, node)| node)
        .find(|node| node.tag() == Tag::If)
        .unwrap();

    let nested = if_stmt.else_if().expect("else-if chain");
    assert_eq!(nested.slots()[0].and_then(Node::text), Some("ok"));
    assert!(nested.else_if().is_none());
}

#[test]
fn test_every_tag_is_built() {
    let census = every_form().census();
    for tag in Tag::ALL {
        assert!(census.contains_key(&tag), "missing {tag}");
    }
}

#[test]
fn test_tag_field_exclusivity() {
    let tree = every_form();
    for (_, node) in tree.walk() {
        let tag = node.tag();

        assert_eq!(node.list().is_some(), tag.is_list(), "{tag}");
        if tag.is_list() {
            assert_eq!(node.slots(), [None; 4], "{tag}");
        }

        let carries_scalar = tag.carries_text()
            || matches!(tag, Tag::IntLiteral | Tag::FloatLiteral | Tag::BoolLiteral);
        assert_eq!(node.payload().is_some(), carries_scalar, "{tag}");
        assert_eq!(
            matches!(node.payload(), Some(Payload::Text(_))),
            tag.carries_text(),
            "{tag}"
        );
    }
}

#[test]
fn test_round_trip_fields() {
    let tree = every_form();
    let NodeKind::Program {
        package,
        declarations,
    } = tree.kind()
    else {
        panic!("root is not a program");
    };
    assert_eq!(package.text(), Some("main"));

    let func = &declarations.list().unwrap()[0];
    let NodeKind::FunctionDecl { name, params, body } = func.kind() else {
        panic!("expected a function declaration");
    };
    assert_eq!(name, "pick");
    assert_eq!(params.list().unwrap().len(), 3);

    let stmts = body.list().unwrap();
    let tags: Vec<Tag> = stmts.iter().map(Node::tag).collect();
    assert_eq!(
        tags,
        vec![
            Tag::VarDecl,
            Tag::DeclAssignment,
            Tag::Assignment,
            Tag::If,
            Tag::For,
            Tag::For,
            Tag::ExprStmt,
        ]
    );

    let NodeKind::ExprStmt { expr } = stmts[6].kind() else {
        panic!("expected an expression statement");
    };
    let NodeKind::FunctionCall { name, args } = expr.kind() else {
        panic!("expected a call");
    };
    assert_eq!(name, "println");
    let payloads: Vec<Payload<'_>> = args.children().filter_map(Node::payload).collect();
    assert_eq!(payloads, vec![Payload::Text("c"), Payload::Bool(true)]);
}

#[test]
fn test_tree_is_acyclic() {
    let tree = every_form();
    let mut visited: HashSet<*const Node> = HashSet::new();

    for (_, node) in tree.walk() {
        assert!(visited.insert(node as *const Node), "node visited twice");
    }
    assert_eq!(visited.len(), tree.node_count());
}

#[test]
fn test_print_visits_every_node_once() {
    let tree = every_form();
    let text = dump(&tree);

    assert_eq!(text.lines().count(), tree.node_count());
    assert!(text.starts_with("Program\n  PackageDecl: main\n  Block\n    FunctionDecl: pick\n"));

    let expected_indents: Vec<usize> = tree.walk().map(|(depth, _)| depth * 2).collect();
    let indents: Vec<usize> = text
        .lines()
        .map(|line| line.len() - line.trim_start().len())
        .collect();
    assert_eq!(indents, expected_indents);
}

#[test]
fn test_print_to_io_sink() {
    let tree = every_form();
    let mut out = Vec::new();
    print(Some(&tree), 0, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), TreePrinter::new().render(&tree));
}

#[test]
fn test_single_leaf_and_empty_list() {
    assert_eq!(dump(&Node::identifier("solo")), "Identifier: solo\n");

    let call = Node::function_call("f", Node::arg_list());
    assert_eq!(call.node_count(), 2);
    assert_eq!(dump(&call), "FunctionCall: f\n  ArgList\n");
}

#[test]
fn test_free_whole_program() {
    let tree = every_form();
    let count = tree.node_count();
    assert_eq!(tree.free(), count);
}
