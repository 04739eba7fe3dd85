//! Diagnostic-producing scenarios that still parse to completion: a
//! redeclaration in the same scope, and an identifier read before any
//! declaration exists for it.

use pencil::ast::NodeKind;
use pencil::CompilationUnit;

fn compile(src: &str) -> CompilationUnit {
    CompilationUnit::compile("t.pn", src).expect("lexing must not fail for these fixtures")
}

#[test]
fn redeclaring_a_variable_in_the_same_scope_is_flagged_but_keeps_the_first_binding() {
    let unit = compile("var x = 1\nvar x = 2\n");
    assert!(unit.parse_error.is_none());

    let messages: Vec<_> = unit.diagnostics.iter().map(|d| d.message.clone()).collect();
    assert!(messages.iter().any(|m| m.contains("Redeclaration of 'x'")));

    // Only the first declaration's symbol survives in the scope.
    let global = unit.symbols.global_scope().borrow();
    let x_count = global.symbols.iter().filter(|s| s.borrow().name == "x").count();
    assert_eq!(x_count, 1);
}

#[test]
fn shadowing_in_a_nested_scope_is_not_a_redeclaration() {
    let src = "var x = 1\nfn f() {\n  var x = 2\n}\n";
    let unit = compile(src);
    assert!(unit.parse_error.is_none());
    assert!(unit.diagnostics.is_empty());
}

#[test]
fn reading_an_undeclared_identifier_inside_an_expression_is_flagged() {
    let unit = compile("var x = y + 1\n");
    assert!(unit.parse_error.is_none());

    let messages: Vec<_> = unit.diagnostics.iter().map(|d| d.message.clone()).collect();
    assert!(messages.iter().any(|m| m.contains("Undefined identifier 'y'")));
}

#[test]
fn writing_to_an_undeclared_identifier_is_also_flagged() {
    let unit = compile("z = 1\n");
    assert!(unit.parse_error.is_none());

    let messages: Vec<_> = unit.diagnostics.iter().map(|d| d.message.clone()).collect();
    assert!(messages.iter().any(|m| m.contains("Undefined identifier 'z'")));

    let statements = match &unit.program.kind {
        NodeKind::Program(p) => &p.statements,
        _ => panic!("expected Program root"),
    };
    assert!(matches!(statements[0].kind, NodeKind::Assign(_)));
}
