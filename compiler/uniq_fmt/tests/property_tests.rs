//! Property-based tests for the printer.
//!
//! Generate random Uniq source and verify:
//! 1. Parse-ability: printed output parses again
//! 2. Idempotence: print(parse(print(parse(code)))) == print(parse(code))

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use uniq_fmt::format_module;
use uniq_parse::parse_module;

// -- Code Generation Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,8}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| !is_keyword(s))
}

fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "fn" | "let"
            | "mut"
            | "set"
            | "return"
            | "if"
            | "elif"
            | "else"
            | "while"
            | "for"
            | "in"
            | "repeat"
            | "until"
            | "fixup"
            | "true"
            | "false"
            | "and"
            | "or"
            | "not"
    )
}

fn type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Int".to_string()),
        Just("Bool".to_string()),
        Just("[Int]".to_string()),
        Just("(Int, Bool)".to_string()),
        Just("Array<Str>".to_string()),
    ]
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..=1000).prop_map(|n| n.to_string()),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("()".to_string()),
        prop::string::string_regex("[a-zA-Z0-9 _]{0,12}")
            .expect("valid regex")
            .prop_map(|s| format!("\"{}\"", s)),
        Just(r#""quote\" and \\ newline\n""#.to_string()),
    ]
}

fn binary_op_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "==", "!=", "<", "<=", ">", ">=", "and", "or",
    ])
}

fn expr_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        literal_strategy(),
        identifier_strategy(),
        (identifier_strategy(), identifier_strategy()).prop_map(|(a, b)| format!("{a}::{b}")),
        (identifier_strategy(), type_strategy()).prop_map(|(f, t)| format!("{f}::<{t}>")),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), binary_op_strategy(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("-{e}")),
            inner.clone().prop_map(|e| format!("not {e}")),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(f, args)| format!("({f})({})", args.join(", "))),
            (inner.clone(), inner.clone()).prop_map(|(b, i)| format!("({b})[{i}]")),
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            prop::collection::vec(inner, 1..4).prop_map(|items| format!("({},)", items.join(", "))),
        ]
    })
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        identifier_strategy(),
        Just("_".to_string()),
        (identifier_strategy(), type_strategy()).prop_map(|(n, t)| format!("{n}: {t}")),
    ];
    leaf.prop_recursive(2, 8, 3, |inner| {
        prop::collection::vec(inner, 0..3).prop_map(|elems| {
            if elems.is_empty() {
                "()".to_string()
            } else {
                format!("({},)", elems.join(", "))
            }
        })
    })
}

fn stmt_strategy() -> impl Strategy<Value = String> {
    let simple = prop_oneof![
        (pattern_strategy(), expr_strategy()).prop_map(|(p, e)| format!("let {p} = {e};")),
        (pattern_strategy(), expr_strategy()).prop_map(|(p, e)| format!("let mut {p} = {e};")),
        (identifier_strategy(), expr_strategy()).prop_map(|(t, e)| format!("set {t} = {e};")),
        expr_strategy().prop_map(|e| format!("{e};")),
        expr_strategy().prop_map(|e| format!("return {e};")),
        Just("return;".to_string()),
    ];
    simple.prop_recursive(3, 16, 3, |inner| {
        let block = prop::collection::vec(inner, 0..3).prop_map(|s| format!("{{ {} }}", s.join(" ")));
        prop_oneof![
            block.clone(),
            (expr_strategy(), block.clone(), prop::option::of(block.clone()))
                .prop_map(|(c, b, e)| match e {
                    Some(e) => format!("if {c} {b} else {e}"),
                    None => format!("if {c} {b}"),
                }),
            (expr_strategy(), block.clone()).prop_map(|(c, b)| format!("while {c} {b}")),
            (pattern_strategy(), expr_strategy(), block.clone())
                .prop_map(|(p, e, b)| format!("for {p} in {e} {b}")),
            (block.clone(), expr_strategy(), prop::option::of(block)).prop_map(|(b, c, f)| {
                match f {
                    Some(f) => format!("repeat {b} until {c} fixup {f};"),
                    None => format!("repeat {b} until {c};"),
                }
            }),
        ]
    })
}

fn param_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        Just("_".to_string()),
        (identifier_strategy(), type_strategy()).prop_map(|(n, t)| format!("{n}: {t}")),
        (identifier_strategy(), identifier_strategy()).prop_map(|(a, b)| format!("({a}, {b})")),
    ]
}

fn callable_strategy() -> impl Strategy<Value = String> {
    (
        identifier_strategy(),
        prop::collection::vec(param_strategy(), 0..4),
        prop::collection::vec(stmt_strategy(), 0..5),
    )
        .prop_map(|(name, params, body)| {
            format!("fn {}({}) {{ {} }}", name, params.join(", "), body.join(" "))
        })
}

fn module_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(callable_strategy(), 1..4).prop_map(|fns| fns.join("\n"))
}

// -- Test Helpers --

fn parse_and_format(source: &str) -> Result<String, String> {
    parse_module(source)
        .map(|module| format_module(&module))
        .map_err(|err| format!("{err} in:\n{source}"))
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn generated_expressions_parse(expr in expr_strategy()) {
        let source = format!("fn f() {{ return {expr}; }}");
        prop_assert!(parse_and_format(&source).is_ok(), "failed to parse {}", source);
    }

    #[test]
    fn printing_is_idempotent(source in module_strategy()) {
        let first = parse_and_format(&source).map_err(TestCaseError::fail)?;
        let second = parse_and_format(&first).map_err(TestCaseError::fail)?;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn printed_output_is_one_statement_per_line(source in module_strategy()) {
        let printed = parse_and_format(&source).map_err(TestCaseError::fail)?;
        for line in printed.lines() {
            let indent = line.len() - line.trim_start().len();
            prop_assert_eq!(indent % uniq_fmt::INDENT_WIDTH, 0);
        }
    }
}
