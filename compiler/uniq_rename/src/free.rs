//! Local references that no enclosing binding declares.
//!
//! A read-only walk that tracks source names with the same scoping rules as
//! the renaming folder: parameters in the root frame, a frame per block,
//! one shared frame for `repeat`, a private frame for `for` with the
//! iterable outside it, and `let` initializers before their patterns.

use rustc_hash::FxHashSet;
use uniq_ir::visitor::{walk_binding_pattern, walk_block, walk_expr, walk_params, walk_stmt};
use uniq_ir::{
    BindingPattern, Block, Callable, Expr, ExprKind, Name, ParamDecl, Stmt, StmtKind, Symbol,
    Visitor,
};

struct FreeLocals<'ast> {
    frames: Vec<FxHashSet<&'ast Name>>,
    share_next_scope: bool,
    free: FxHashSet<&'ast Name>,
}

impl<'ast> FreeLocals<'ast> {
    fn bind(&mut self, name: &'ast Name) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name);
        }
    }

    fn is_bound(&self, name: &Name) -> bool {
        self.frames.iter().any(|frame| frame.contains(name))
    }

    fn scoped(&mut self, f: impl FnOnce(&mut Self)) {
        self.frames.push(FxHashSet::default());
        f(self);
        self.frames.pop();
    }
}

impl<'ast> Visitor<'ast> for FreeLocals<'ast> {
    fn visit_params(&mut self, params: &'ast ParamDecl) {
        if let ParamDecl::Named(decl) = params {
            self.bind(&decl.name);
        }
        walk_params(self, params);
    }

    fn visit_block(&mut self, block: &'ast Block) {
        if std::mem::take(&mut self.share_next_scope) {
            walk_block(self, block);
        } else {
            self.scoped(|this| walk_block(this, block));
        }
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        match &stmt.kind {
            StmtKind::For {
                pattern,
                iterable,
                body,
            } => {
                self.visit_expr(iterable);
                self.scoped(|this| {
                    this.visit_binding_pattern(pattern);
                    this.visit_block(body);
                });
            }
            StmtKind::Repeat { .. } => self.scoped(|this| {
                this.share_next_scope = true;
                walk_stmt(this, stmt);
            }),
            _ => walk_stmt(self, stmt),
        }
    }

    fn visit_binding_pattern(&mut self, pattern: &'ast BindingPattern) {
        if let BindingPattern::Name(decl) = pattern {
            self.bind(&decl.name);
        }
        walk_binding_pattern(self, pattern);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        if let ExprKind::Ident {
            symbol: Symbol::Local(name),
            ..
        } = &expr.kind
        {
            if !self.is_bound(name) {
                self.free.insert(name);
            }
        }
        walk_expr(self, expr);
    }
}

/// Every `Local` reference in `callable` that resolves to no binding, sorted
/// and without repeats.
pub fn free_locals(callable: &Callable) -> Vec<Name> {
    let mut scan = FreeLocals {
        frames: vec![FxHashSet::default()],
        share_next_scope: false,
        free: FxHashSet::default(),
    };
    scan.visit_callable(callable);
    let mut free: Vec<Name> = scan.free.into_iter().cloned().collect();
    free.sort();
    free
}
