//! Read-only traversal.
//!
//! Override `visit_*` methods to observe specific nodes and call the
//! matching `walk_*` function to continue into children. Children are
//! visited in the same order [`crate::fold`] folds them.
//!
//! ```text
//! struct CountLocals(usize);
//!
//! impl<'ast> Visitor<'ast> for CountLocals {
//!     fn visit_expr(&mut self, expr: &'ast Expr) {
//!         if let ExprKind::Ident { symbol: Symbol::Local(_), .. } = &expr.kind {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::ast::{
    BindingPattern, Block, Callable, Expr, ExprKind, Module, ParamDecl, Stmt, StmtKind,
};
use uniq_stack::ensure_sufficient_stack;

pub trait Visitor<'ast> {
    fn visit_module(&mut self, module: &'ast Module) {
        walk_module(self, module);
    }

    fn visit_callable(&mut self, callable: &'ast Callable) {
        walk_callable(self, callable);
    }

    fn visit_params(&mut self, params: &'ast ParamDecl) {
        walk_params(self, params);
    }

    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_binding_pattern(&mut self, pattern: &'ast BindingPattern) {
        walk_binding_pattern(self, pattern);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, module: &'ast Module) {
    for callable in &module.callables {
        visitor.visit_callable(callable);
    }
}

pub fn walk_callable<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, callable: &'ast Callable) {
    visitor.visit_params(&callable.params);
    visitor.visit_block(&callable.body);
}

pub fn walk_params<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, params: &'ast ParamDecl) {
    if let ParamDecl::Tuple(items, _) = params {
        for item in items {
            visitor.visit_params(item);
        }
    }
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast Block) {
    ensure_sufficient_stack(|| {
        for stmt in &block.stmts {
            visitor.visit_stmt(stmt);
        }
    });
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match &stmt.kind {
        StmtKind::Let { pattern, init, .. } => {
            visitor.visit_expr(init);
            visitor.visit_binding_pattern(pattern);
        }
        StmtKind::Set { target, value } => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
        StmtKind::Expr(expr) => visitor.visit_expr(expr),
        StmtKind::Return(value) => {
            if let Some(expr) = value {
                visitor.visit_expr(expr);
            }
        }
        StmtKind::If {
            branches,
            else_block,
        } => {
            for branch in branches {
                visitor.visit_expr(&branch.cond);
                visitor.visit_block(&branch.block);
            }
            if let Some(block) = else_block {
                visitor.visit_block(block);
            }
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr(cond);
            visitor.visit_block(body);
        }
        StmtKind::For {
            pattern,
            iterable,
            body,
        } => {
            visitor.visit_expr(iterable);
            visitor.visit_binding_pattern(pattern);
            visitor.visit_block(body);
        }
        StmtKind::Repeat { body, until, fixup } => {
            visitor.visit_block(body);
            visitor.visit_expr(until);
            if let Some(block) = fixup {
                visitor.visit_block(block);
            }
        }
        StmtKind::Block(block) => visitor.visit_block(block),
    }
}

pub fn walk_binding_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pattern: &'ast BindingPattern,
) {
    if let BindingPattern::Tuple(elems, _) = pattern {
        for elem in elems {
            visitor.visit_binding_pattern(elem);
        }
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    ensure_sufficient_stack(|| match &expr.kind {
        ExprKind::Int(_)
        | ExprKind::Bool(_)
        | ExprKind::Str(_)
        | ExprKind::Unit
        | ExprKind::Ident { .. } => {}
        ExprKind::Unary { operand, .. } => visitor.visit_expr(operand),
        ExprKind::Binary { lhs, rhs, .. } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        ExprKind::Call { callee, args } => {
            visitor.visit_expr(callee);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        ExprKind::Index { base, index } => {
            visitor.visit_expr(base);
            visitor.visit_expr(index);
        }
        ExprKind::Tuple(items) | ExprKind::Array(items) => {
            for item in items {
                visitor.visit_expr(item);
            }
        }
    });
}
