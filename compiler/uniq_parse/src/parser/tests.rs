use crate::{parse_callable, parse_expr, parse_module, ParseError, TokenKind};
use pretty_assertions::assert_eq;
use uniq_ir::{
    BinaryOp, BindingPattern, Expr, ExprKind, Name, ParamDecl, Span, StmtKind, Symbol, TypeExpr,
    UnaryOp,
};

fn expr(source: &str) -> Expr {
    match parse_expr(source) {
        Ok(expr) => expr,
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    }
}

/// Compact s-expression rendering that ignores spans.
fn sexp(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Int(v) => v.to_string(),
        ExprKind::Bool(b) => b.to_string(),
        ExprKind::Str(s) => format!("{s:?}"),
        ExprKind::Unit => "()".to_string(),
        ExprKind::Ident { symbol, type_args } => {
            let name = match symbol {
                Symbol::Local(name) => name.to_string(),
                Symbol::Global(path) => format!("global:{path}"),
            };
            match type_args {
                Some(args) => format!("{name}<{}>", args.len()),
                None => name,
            }
        }
        ExprKind::Unary { op, operand } => format!("({} {})", op.as_symbol().trim(), sexp(operand)),
        ExprKind::Binary { op, lhs, rhs } => format!("({op} {} {})", sexp(lhs), sexp(rhs)),
        ExprKind::Call { callee, args } => {
            let args: Vec<String> = args.iter().map(sexp).collect();
            format!("(call {} [{}])", sexp(callee), args.join(" "))
        }
        ExprKind::Index { base, index } => format!("(index {} {})", sexp(base), sexp(index)),
        ExprKind::Tuple(items) => {
            let items: Vec<String> = items.iter().map(sexp).collect();
            format!("(tuple {})", items.join(" "))
        }
        ExprKind::Array(items) => {
            let items: Vec<String> = items.iter().map(sexp).collect();
            format!("[{}]", items.join(" "))
        }
    }
}

#[test]
fn binary_precedence_and_associativity() {
    assert_eq!(sexp(&expr("1 + 2 * 3 - 4")), "(- (+ 1 (* 2 3)) 4)");
    assert_eq!(sexp(&expr("a or b and c == d")), "(or a (and b (== c d)))");
    assert_eq!(sexp(&expr("a < b == c >= d")), "(== (< a b) (>= c d))");
    assert_eq!(sexp(&expr("(1 + 2) % 3")), "(% (+ 1 2) 3)");
}

#[test]
fn prefix_binds_tighter_than_binary_but_looser_than_postfix() {
    assert_eq!(sexp(&expr("-a * b")), "(* (- a) b)");
    assert_eq!(sexp(&expr("not f(x)[0]")), "(not (index (call f [x]) 0))");
    assert_eq!(sexp(&expr("- -x")), "(- (- x))");
}

#[test]
fn parens_units_and_tuples() {
    assert_eq!(sexp(&expr("()")), "()");
    assert_eq!(sexp(&expr("(x)")), "x");
    assert_eq!(sexp(&expr("(x,)")), "(tuple x)");
    assert_eq!(sexp(&expr("(x, (y, z))")), "(tuple x (tuple y z))");
    assert_eq!(sexp(&expr("[1, 2,]")), "[1 2]");
}

#[test]
fn paths_and_type_arguments() {
    assert_eq!(sexp(&expr("io::print(x)")), "(call global:io::print [x])");
    assert_eq!(sexp(&expr("id::<Int>(x)")), "(call id<1> [x])");

    let parsed = expr("a::b::<Array<Int>, (Int, Bool)>");
    let ExprKind::Ident {
        symbol: Symbol::Global(path),
        type_args: Some(args),
    } = parsed.kind
    else {
        panic!("expected generic global");
    };
    assert_eq!(path.namespace, vec![Name::new("a")]);
    assert_eq!(path.name, Name::new("b"));
    assert!(matches!(&args[0], TypeExpr::Named { args, .. } if args.len() == 1));
    assert!(matches!(&args[1], TypeExpr::Tuple(elems, _) if elems.len() == 2));
}

#[test]
fn expression_spans_cover_operands() {
    let parsed = expr("a + bc");
    assert_eq!(parsed.span, Span::new(0, 6));
    let parsed = expr("f(x)");
    assert_eq!(parsed.span, Span::new(0, 4));
}

#[test]
fn callable_parameter_shapes() {
    let shape = |source: &str| match parse_callable(source) {
        Ok(c) => c.params,
        Err(err) => panic!("parse failed: {err}"),
    };

    assert!(matches!(shape("fn f() {}"), ParamDecl::Tuple(items, _) if items.is_empty()));
    assert!(matches!(shape("fn f(x) {}"), ParamDecl::Named(d) if d.name == "x"));
    assert!(matches!(shape("fn f(_) {}"), ParamDecl::Unnamed(_)));

    let nested = shape("fn f(a: Int, (b, c), _) {}");
    let names: Vec<&str> = nested.names().into_iter().map(Name::as_str).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    let ParamDecl::Tuple(items, _) = &nested else {
        panic!("expected tuple params");
    };
    assert!(matches!(&items[0], ParamDecl::Named(d) if d.ty.is_some()));
    assert!(matches!(&items[1], ParamDecl::Tuple(inner, _) if inner.len() == 2));
    assert!(matches!(&items[2], ParamDecl::Unnamed(_)));
}

#[test]
fn statement_forms() {
    let source = r#"
        fn f(xs) {
            let mut (a, _) = (1, 2);   // destructuring
            set a = a + 1;
            if a > 1 { return a; } elif a < 0 { return; } else { g(); }
            while a > 0 { set a = a - 1; }
            for x in xs { print(x); }
            repeat { let y = 1; } until y > 0 fixup { log("retry"); };
            repeat { } until true;
            { let inner = 0; }
        }
    "#;
    let callable = match parse_callable(source) {
        Ok(c) => c,
        Err(err) => panic!("parse failed: {err}"),
    };
    let kinds: Vec<&str> = callable
        .body
        .stmts
        .iter()
        .map(|s| match &s.kind {
            StmtKind::Let { .. } => "let",
            StmtKind::Set { .. } => "set",
            StmtKind::Expr(_) => "expr",
            StmtKind::Return(_) => "return",
            StmtKind::If { .. } => "if",
            StmtKind::While { .. } => "while",
            StmtKind::For { .. } => "for",
            StmtKind::Repeat { .. } => "repeat",
            StmtKind::Block(_) => "block",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["let", "set", "if", "while", "for", "repeat", "repeat", "block"]
    );

    let StmtKind::Let {
        pattern, mutable, ..
    } = &callable.body.stmts[0].kind
    else {
        panic!("expected let");
    };
    assert!(*mutable);
    assert!(matches!(
        pattern,
        BindingPattern::Tuple(elems, _)
            if matches!(elems.as_slice(), [BindingPattern::Name(_), BindingPattern::Discarded(_)])
    ));

    let StmtKind::If {
        branches,
        else_block,
    } = &callable.body.stmts[2].kind
    else {
        panic!("expected if");
    };
    assert_eq!(branches.len(), 2);
    assert!(else_block.is_some());
    assert!(matches!(
        branches[1].block.stmts[0].kind,
        StmtKind::Return(None)
    ));

    assert!(matches!(
        &callable.body.stmts[5].kind,
        StmtKind::Repeat { fixup: Some(_), .. }
    ));
    assert!(matches!(
        &callable.body.stmts[6].kind,
        StmtKind::Repeat { fixup: None, .. }
    ));
}

#[test]
fn module_holds_callables_in_order() {
    let module = match parse_module("fn a() {} // one\nfn b(x) { return x; }") {
        Ok(m) => m,
        Err(err) => panic!("parse failed: {err}"),
    };
    let names: Vec<&str> = module.callables.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(module.callables[1].span, Span::new(17, 38));
}

#[test]
fn empty_source_is_an_empty_module() {
    assert_eq!(parse_module("  // nothing\n").map(|m| m.callables.len()), Ok(0));
}

#[test]
fn missing_semicolon_reports_next_token() {
    let err = parse_callable("fn f() { let x = 1 let y = 2; }");
    assert_eq!(
        err.map(|_| ()),
        Err(ParseError::UnexpectedToken {
            expected: "`;`",
            found: TokenKind::Let,
            span: Span::new(19, 22),
        })
    );
}

#[test]
fn unterminated_block_reports_end_of_input() {
    let err = parse_callable("fn f() { return 1;");
    assert!(matches!(
        err,
        Err(ParseError::UnexpectedToken {
            found: TokenKind::Eof,
            ..
        })
    ));
}

#[test]
fn trailing_tokens_after_callable_are_rejected() {
    let err = parse_callable("fn f() {} fn g() {}");
    assert!(matches!(
        err,
        Err(ParseError::UnexpectedToken {
            expected: "end of input",
            found: TokenKind::Fn,
            ..
        })
    ));
}

#[test]
fn deeply_nested_input_does_not_overflow() {
    let depth = 20_000;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(sexp(&expr(&source)), "x");

    let source = format!("{}x", "-".repeat(depth));
    let mut parsed = expr(&source);
    let mut negations = 0;
    while let ExprKind::Unary {
        op: UnaryOp::Neg,
        operand,
    } = parsed.kind
    {
        negations += 1;
        parsed = *operand;
    }
    assert_eq!(negations, depth);

    let blocks = 2_000;
    let source = format!("fn f() {{{}{}", "{ ".repeat(blocks), "}".repeat(blocks + 1));
    assert!(parse_callable(&source).is_ok());
}

#[test]
fn binary_chain_is_left_associative() {
    let parsed = expr("a - b - c");
    let ExprKind::Binary { op, lhs, .. } = parsed.kind else {
        panic!("expected binary");
    };
    assert_eq!(op, BinaryOp::Sub);
    assert!(matches!(lhs.kind, ExprKind::Binary { op: BinaryOp::Sub, .. }));
}
