use super::*;
use crate::ast::{BinaryOp, LocalDecl, QualifiedName};
use crate::{Name, Visitor};
use pretty_assertions::assert_eq;

fn sp() -> Span {
    Span::DUMMY
}

fn local(name: &str) -> Expr {
    Expr::local(name, sp())
}

fn decl(name: &str) -> BindingPattern {
    BindingPattern::Name(LocalDecl::new(Name::new(name), None, sp()))
}

fn stmt(kind: StmtKind) -> Stmt {
    Stmt::new(kind, sp())
}

fn add(lhs: Expr, rhs: Expr) -> Expr {
    Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        sp(),
    )
}

/// Records every identifier and binding in fold order.
#[derive(Default)]
struct Trace(Vec<String>);

impl Folder for Trace {
    type Error = ();

    fn fold_binding_pattern(&mut self, pattern: BindingPattern) -> Result<BindingPattern, ()> {
        if let BindingPattern::Name(decl) = &pattern {
            self.0.push(format!("bind {}", decl.name));
        }
        walk_binding_pattern(self, pattern)
    }

    fn fold_identifier(
        &mut self,
        symbol: Symbol,
        type_args: Option<Vec<TypeExpr>>,
        span: Span,
    ) -> Result<Expr, ()> {
        if let Symbol::Local(name) = &symbol {
            self.0.push(format!("use {name}"));
        }
        Ok(Expr::new(ExprKind::Ident { symbol, type_args }, span))
    }
}

#[test]
fn let_folds_initializer_before_pattern() {
    let block = Block::new(
        vec![stmt(StmtKind::Let {
            pattern: decl("x"),
            mutable: false,
            init: add(local("x"), local("y")),
        })],
        sp(),
    );
    let mut trace = Trace::default();
    let folded = trace.fold_block(block.clone());
    assert_eq!(folded, Ok(block));
    assert_eq!(trace.0, vec!["use x", "use y", "bind x"]);
}

#[test]
fn repeat_folds_body_then_condition_then_fixup() {
    let kind = StmtKind::Repeat {
        body: Block::new(
            vec![stmt(StmtKind::Let {
                pattern: decl("y"),
                mutable: false,
                init: local("a"),
            })],
            sp(),
        ),
        until: local("y"),
        fixup: Some(Block::new(vec![stmt(StmtKind::Expr(local("z")))], sp())),
    };
    let mut trace = Trace::default();
    assert!(trace.fold_stmt(stmt(kind)).is_ok());
    assert_eq!(trace.0, vec!["use a", "bind y", "use y", "use z"]);
}

#[test]
fn for_folds_iterable_before_pattern() {
    let kind = StmtKind::For {
        pattern: BindingPattern::Tuple(vec![decl("i"), BindingPattern::Discarded(sp())], sp()),
        iterable: local("items"),
        body: Block::new(vec![stmt(StmtKind::Expr(local("i")))], sp()),
    };
    let mut trace = Trace::default();
    assert!(trace.fold_stmt(stmt(kind)).is_ok());
    assert_eq!(trace.0, vec!["use items", "bind i", "use i"]);
}

/// Replaces every local reference with `renamed`, failing on `poison`.
struct RenameAll;

impl Folder for RenameAll {
    type Error = String;

    fn fold_identifier(
        &mut self,
        symbol: Symbol,
        type_args: Option<Vec<TypeExpr>>,
        span: Span,
    ) -> Result<Expr, String> {
        match symbol {
            Symbol::Local(name) if name == "poison" => Err(format!("hit {name}")),
            Symbol::Local(_) => Ok(Expr::new(
                ExprKind::Ident {
                    symbol: Symbol::Local(Name::new("renamed")),
                    type_args,
                },
                span,
            )),
            global @ Symbol::Global(_) => Ok(Expr::new(
                ExprKind::Ident {
                    symbol: global,
                    type_args,
                },
                span,
            )),
        }
    }
}

#[test]
fn fold_rebuilds_nested_expressions() {
    let expr = Expr::new(
        ExprKind::Call {
            callee: Box::new(Expr::new(
                ExprKind::Ident {
                    symbol: Symbol::Global(QualifiedName {
                        namespace: vec![Name::new("Math")],
                        name: Name::new("max"),
                    }),
                    type_args: None,
                },
                sp(),
            )),
            args: vec![local("a"), Expr::new(ExprKind::Int(1), sp())],
        },
        sp(),
    );
    let Ok(folded) = RenameAll.fold_expr(expr) else {
        panic!("fold failed");
    };
    let ExprKind::Call { callee, args } = folded.kind else {
        panic!("expected call");
    };
    assert!(matches!(
        callee.kind,
        ExprKind::Ident {
            symbol: Symbol::Global(_),
            ..
        }
    ));
    assert_eq!(args[0], local("renamed"));
}

#[test]
fn fold_stops_at_first_error() {
    let block = Block::new(
        vec![
            stmt(StmtKind::Expr(local("poison"))),
            stmt(StmtKind::Expr(local("later"))),
        ],
        sp(),
    );
    assert_eq!(RenameAll.fold_block(block), Err("hit poison".to_string()));
}

#[test]
fn default_folder_is_identity_on_callables() {
    struct Identity;
    impl Folder for Identity {
        type Error = ();
    }

    let callable = Callable {
        name: Name::new("f"),
        params: ParamDecl::Tuple(
            vec![
                ParamDecl::Named(LocalDecl::new(Name::new("a"), None, sp())),
                ParamDecl::Unnamed(sp()),
            ],
            sp(),
        ),
        body: Block::new(vec![stmt(StmtKind::Return(Some(local("a"))))], sp()),
        span: sp(),
    };
    let module = Module {
        callables: vec![callable],
    };
    assert_eq!(Identity.fold_module(module.clone()), Ok(module));
}

#[test]
fn visitor_sees_nodes_in_fold_order() {
    struct Names(Vec<String>);
    impl<'ast> Visitor<'ast> for Names {
        fn visit_binding_pattern(&mut self, pattern: &'ast BindingPattern) {
            if let BindingPattern::Name(decl) = pattern {
                self.0.push(format!("bind {}", decl.name));
            }
            crate::visitor::walk_binding_pattern(self, pattern);
        }

        fn visit_expr(&mut self, expr: &'ast Expr) {
            if let ExprKind::Ident {
                symbol: Symbol::Local(name),
                ..
            } = &expr.kind
            {
                self.0.push(format!("use {name}"));
            }
            crate::visitor::walk_expr(self, expr);
        }
    }

    let block = Block::new(
        vec![stmt(StmtKind::Let {
            pattern: decl("x"),
            mutable: true,
            init: add(local("x"), local("y")),
        })],
        sp(),
    );
    let mut names = Names(Vec::new());
    names.visit_block(&block);
    assert_eq!(names.0, vec!["use x", "use y", "bind x"]);
}
