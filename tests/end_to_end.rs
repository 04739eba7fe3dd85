//! Whole-pipeline scenarios: source text in, AST shape and symbol-table
//! state out. Each test compiles a small snippet and inspects the parts of
//! the result relevant to that construct.

use pretty_assertions::assert_eq;

use pencil::ast::NodeKind;
use pencil::symbol::SymbolKind;
use pencil::CompilationUnit;

fn compile(src: &str) -> CompilationUnit {
    CompilationUnit::compile("t.pn", src).expect("lexing must not fail for these fixtures")
}

fn top_level(unit: &CompilationUnit) -> &[pencil::ast::Node] {
    match &unit.program.kind {
        NodeKind::Program(program) => &program.statements,
        _ => panic!("program root must be NodeKind::Program"),
    }
}

#[test]
fn variable_declaration_inserts_a_symbol() {
    let unit = compile("var x = 5\n");
    assert!(unit.parse_error.is_none());

    let statements = top_level(&unit);
    assert_eq!(statements.len(), 1);
    assert!(matches!(statements[0].kind, NodeKind::VarDecl(_)));

    let symbol = unit.symbols.lookup("x").expect("x must be declared");
    assert_eq!(symbol.borrow().symbol_kind, SymbolKind::Variable);
}

#[test]
fn constant_referencing_an_undefined_identifier_reports_a_diagnostic() {
    let unit = compile("let y = z\n");
    assert!(unit.parse_error.is_none());

    let statements = top_level(&unit);
    assert!(matches!(statements[0].kind, NodeKind::ConstDecl(_)));

    assert!(unit.symbols.lookup("z").is_none());
    let messages: Vec<_> = unit.diagnostics.iter().map(|d| d.message.clone()).collect();
    assert!(messages.iter().any(|m| m.contains("Undefined identifier 'z'")));
}

#[test]
fn function_declaration_registers_itself_and_its_parameters() {
    let unit = compile("fn add(a: int, b: int) -> int {\n  return a + b\n}\n");
    assert!(unit.parse_error.is_none());

    let statements = top_level(&unit);
    assert_eq!(statements.len(), 1);
    let NodeKind::FnDecl(fn_decl) = &statements[0].kind else {
        panic!("expected a FnDecl");
    };
    assert_eq!(fn_decl.params.len(), 2);
    assert_eq!(fn_decl.name.lexeme, "add");

    let symbol = unit.symbols.lookup("add").expect("add must be declared in global scope");
    assert_eq!(symbol.borrow().symbol_kind, SymbolKind::Function);

    // The function's own scope is reachable via the global scope's
    // children even though the parser has already popped back out of it.
    let global = unit.symbols.global_scope().borrow();
    let fn_scope = global
        .children
        .iter()
        .find(|scope| scope.borrow().symbols.len() == 2)
        .expect("function scope with both parameters must exist");
    let names: Vec<_> = fn_scope
        .borrow()
        .symbols
        .iter()
        .map(|s| s.borrow().name.clone())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn if_else_if_chain_nests_into_else_branch() {
    let src = "var a = 1\nvar b = 2\nvar x = 0\nif a {\n  x = 1\n} else if b {\n  x = 2\n} else {\n  x = 3\n}\n";
    let unit = compile(src);
    assert!(unit.parse_error.is_none());
    assert!(unit.diagnostics.is_empty());

    let statements = top_level(&unit);
    let if_stmt = statements
        .iter()
        .find(|s| matches!(s.kind, NodeKind::If(_)))
        .expect("an If node must be present");

    let NodeKind::If(outer) = &if_stmt.kind else {
        unreachable!()
    };
    let else_branch = outer.else_branch.as_ref().expect("else branch must be present");
    assert!(matches!(else_branch.kind, NodeKind::If(_)), "else-if nests as another If node");

    let NodeKind::If(inner) = &else_branch.kind else {
        unreachable!()
    };
    assert!(inner.else_branch.is_some());
    assert!(matches!(
        inner.else_branch.as_ref().unwrap().kind,
        NodeKind::Block(_)
    ));
}

#[test]
fn match_with_default_case_separates_it_from_the_pattern_cases() {
    let src = "var a = 1\nvar x = 0\nmatch a {\n  1 => x = 1,\n  2 => x = 2,\n  _ => x = 0,\n}\n";
    let unit = compile(src);
    assert!(unit.parse_error.is_none());

    let statements = top_level(&unit);
    let match_stmt = statements
        .iter()
        .find(|s| matches!(s.kind, NodeKind::Match(_)))
        .expect("a Match node must be present");

    let NodeKind::Match(m) = &match_stmt.kind else {
        unreachable!()
    };
    assert_eq!(m.cases.len(), 2);
    assert!(m.default_case.is_some());
    for case in &m.cases {
        let NodeKind::MatchCase(case) = &case.kind else {
            panic!("match arm must be a MatchCase node");
        };
        assert!(case.pattern.is_some());
    }
}

#[test]
fn iterator_loop_binds_its_variable_inside_a_loop_flagged_scope() {
    let src = "var x = 0\nloop i : 0...10 {\n  x = i\n}\n";
    let unit = compile(src);
    assert!(unit.parse_error.is_none());
    assert!(unit.diagnostics.is_empty(), "{:?}", unit.diagnostics.iter().collect::<Vec<_>>());

    let statements = top_level(&unit);
    let loop_stmt = statements
        .iter()
        .find(|s| matches!(s.kind, NodeKind::Loop(_)))
        .expect("a Loop node must be present");

    let NodeKind::Loop(loop_node) = &loop_stmt.kind else {
        unreachable!()
    };
    let condition = loop_node.condition.as_ref().expect("iterator form always has a condition");
    assert!(matches!(condition.kind, NodeKind::LoopExpr(_)));

    let NodeKind::LoopExpr(loop_expr) = &condition.kind else {
        unreachable!()
    };
    assert_eq!(loop_expr.ident.lexeme, "i");
    assert!(matches!(loop_expr.range.kind, NodeKind::Range(_)));
}
