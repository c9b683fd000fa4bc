use crate::{format_callable, format_expr, format_module};
use pretty_assertions::assert_eq;
use uniq_ir::{BinaryOp, Expr, ExprKind, Span};
use uniq_parse::{parse_callable, parse_expr, parse_module};

fn reprint_expr(source: &str) -> String {
    match parse_expr(source) {
        Ok(expr) => format_expr(&expr),
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    }
}

fn reprint_callable(source: &str) -> String {
    match parse_callable(source) {
        Ok(callable) => format_callable(&callable),
        Err(err) => panic!("parse failed: {err}"),
    }
}

fn int(value: i64) -> Expr {
    Expr::new(ExprKind::Int(value), Span::DUMMY)
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::new(
        ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        Span::DUMMY,
    )
}

#[test]
fn redundant_parentheses_are_dropped() {
    assert_eq!(reprint_expr("((a)) + (b * c)"), "a + b * c");
    assert_eq!(reprint_expr("(a or b) and c"), "(a or b) and c");
    assert_eq!(reprint_expr("a - (b - c)"), "a - (b - c)");
    assert_eq!(reprint_expr("(a - b) - c"), "a - b - c");
}

#[test]
fn prefix_and_postfix_operands() {
    assert_eq!(reprint_expr("-(a + b)"), "-(a + b)");
    assert_eq!(reprint_expr("not (x)"), "not x");
    assert_eq!(reprint_expr("(-f)(x)"), "(-f)(x)");
    assert_eq!(reprint_expr("xs[i + 1](y)"), "xs[i + 1](y)");
}

#[test]
fn literals_and_compound_forms() {
    assert_eq!(reprint_expr(r#""a\"b\n""#), r#""a\"b\n""#);
    assert_eq!(reprint_expr("(x,)"), "(x,)");
    assert_eq!(reprint_expr("(1, true, ())"), "(1, true, ())");
    assert_eq!(reprint_expr("[ ]"), "[]");
    assert_eq!(reprint_expr("io::print::<Array<Int>>"), "io::print::<Array<Int>>");
}

#[test]
fn hand_built_tree_gets_needed_parentheses() {
    // (1 + 2) * 3 built directly, no grouping node needed.
    let tree = binary(BinaryOp::Mul, binary(BinaryOp::Add, int(1), int(2)), int(3));
    assert_eq!(format_expr(&tree), "(1 + 2) * 3");
    assert_eq!(format_expr(&int(-4)), "-4");
}

#[test]
fn callable_layout() {
    let source = "fn f(a: Int, (b, _)) { let mut (x, y,) = (a, b); if x { return; } elif y { set x = y; } else {} repeat { let z = 1; } until z > 0 fixup { log(z); }; for i in xs { { } } }";
    let expected = "\
fn f(a: Int, (b, _)) {
    let mut (x, y) = (a, b);
    if x {
        return;
    } elif y {
        set x = y;
    } else {}
    repeat {
        let z = 1;
    } until z > 0 fixup {
        log(z);
    };
    for i in xs {
        {}
    }
}
";
    assert_eq!(reprint_callable(source), expected);
}

#[test]
fn single_and_empty_parameter_lists() {
    assert_eq!(reprint_callable("fn f() {}"), "fn f() {}\n");
    assert_eq!(reprint_callable("fn f(_) {}"), "fn f(_) {}\n");
    assert_eq!(reprint_callable("fn f(x: [Int]) {}"), "fn f(x: [Int]) {}\n");
    assert_eq!(
        reprint_callable("fn f(p: (Int, Bool)) {}"),
        "fn f(p: (Int, Bool)) {}\n"
    );
}

#[test]
fn module_separates_callables_with_blank_line() {
    let module = match parse_module("fn a() {}\nfn b() { return 1; }") {
        Ok(m) => m,
        Err(err) => panic!("parse failed: {err}"),
    };
    assert_eq!(
        format_module(&module),
        "fn a() {}\n\nfn b() {\n    return 1;\n}\n"
    );
}

#[test]
fn annotated_bindings_keep_their_types() {
    let source = "fn f(n: Int, (xs: [Int], _)) { let (i: Int, m: Map<Str, Int>) = (n, g()); for (k: Str, v) in m { } }";
    let expected = "\
fn f(n: Int, (xs: [Int], _)) {
    let (i: Int, m: Map<Str, Int>) = (n, g());
    for (k: Str, v) in m {}
}
";
    assert_eq!(reprint_callable(source), expected);
}
