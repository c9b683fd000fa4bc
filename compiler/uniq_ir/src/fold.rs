//! Owning tree transformation.
//!
//! A [`Folder`] consumes nodes and returns rebuilt ones. Every `fold_*`
//! method defaults to the matching `walk_*` function, which folds the
//! node's children through the folder and reassembles the node; override a
//! method to intercept one node kind and call the `walk_*` function to keep
//! descending.
//!
//! Errors abort the walk: walkers propagate the first `Err` with `?` and
//! drop the partially rebuilt tree.
//!
//! # Evaluation order
//!
//! Walkers fold children in the order the program evaluates them, which
//! matters to passes that track scopes:
//! - `let`: initializer, then pattern
//! - `for`: iterable, then pattern, then body
//! - `repeat`: body, then `until` condition, then fixup
//! - `if`/`elif`: each condition before its block, `else` last
//! - calls: callee, then arguments left to right

use crate::ast::{
    BindingPattern, Block, Callable, CondBranch, Expr, ExprKind, Module, ParamDecl, Stmt,
    StmtKind, Symbol, TypeExpr,
};
use crate::Span;
use uniq_stack::ensure_sufficient_stack;

/// Owning transformation over the syntax tree.
pub trait Folder {
    type Error;

    fn fold_module(&mut self, module: Module) -> Result<Module, Self::Error> {
        walk_module(self, module)
    }

    fn fold_callable(&mut self, callable: Callable) -> Result<Callable, Self::Error> {
        walk_callable(self, callable)
    }

    /// Fold a parameter declaration. Called once for the whole parameter
    /// structure and again for each element of a tuple by [`walk_params`].
    fn fold_params(&mut self, params: ParamDecl) -> Result<ParamDecl, Self::Error> {
        walk_params(self, params)
    }

    fn fold_block(&mut self, block: Block) -> Result<Block, Self::Error> {
        walk_block(self, block)
    }

    fn fold_stmt(&mut self, stmt: Stmt) -> Result<Stmt, Self::Error> {
        walk_stmt(self, stmt)
    }

    fn fold_for(
        &mut self,
        pattern: BindingPattern,
        iterable: Expr,
        body: Block,
    ) -> Result<StmtKind, Self::Error> {
        walk_for(self, pattern, iterable, body)
    }

    fn fold_repeat(
        &mut self,
        body: Block,
        until: Expr,
        fixup: Option<Block>,
    ) -> Result<StmtKind, Self::Error> {
        walk_repeat(self, body, until, fixup)
    }

    fn fold_binding_pattern(
        &mut self,
        pattern: BindingPattern,
    ) -> Result<BindingPattern, Self::Error> {
        walk_binding_pattern(self, pattern)
    }

    fn fold_expr(&mut self, expr: Expr) -> Result<Expr, Self::Error> {
        walk_expr(self, expr)
    }

    /// Fold an identifier reference. The default rebuilds it unchanged.
    fn fold_identifier(
        &mut self,
        symbol: Symbol,
        type_args: Option<Vec<TypeExpr>>,
        span: Span,
    ) -> Result<Expr, Self::Error> {
        Ok(Expr::new(ExprKind::Ident { symbol, type_args }, span))
    }
}

pub fn walk_module<F: Folder + ?Sized>(f: &mut F, module: Module) -> Result<Module, F::Error> {
    let callables = module
        .callables
        .into_iter()
        .map(|callable| f.fold_callable(callable))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Module { callables })
}

pub fn walk_callable<F: Folder + ?Sized>(
    f: &mut F,
    callable: Callable,
) -> Result<Callable, F::Error> {
    let Callable {
        name,
        params,
        body,
        span,
    } = callable;
    let params = f.fold_params(params)?;
    let body = f.fold_block(body)?;
    Ok(Callable {
        name,
        params,
        body,
        span,
    })
}

pub fn walk_params<F: Folder + ?Sized>(
    f: &mut F,
    params: ParamDecl,
) -> Result<ParamDecl, F::Error> {
    match params {
        ParamDecl::Tuple(items, span) => {
            let items = items
                .into_iter()
                .map(|item| f.fold_params(item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ParamDecl::Tuple(items, span))
        }
        leaf @ (ParamDecl::Named(_) | ParamDecl::Unnamed(_)) => Ok(leaf),
    }
}

pub fn walk_block<F: Folder + ?Sized>(f: &mut F, block: Block) -> Result<Block, F::Error> {
    let Block { stmts, span } = block;
    ensure_sufficient_stack(|| {
        let stmts = stmts
            .into_iter()
            .map(|stmt| f.fold_stmt(stmt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Block { stmts, span })
    })
}

pub fn walk_stmt<F: Folder + ?Sized>(f: &mut F, stmt: Stmt) -> Result<Stmt, F::Error> {
    let Stmt { kind, span } = stmt;
    let kind = match kind {
        StmtKind::Let {
            pattern,
            mutable,
            init,
        } => {
            let init = f.fold_expr(init)?;
            let pattern = f.fold_binding_pattern(pattern)?;
            StmtKind::Let {
                pattern,
                mutable,
                init,
            }
        }
        StmtKind::Set { target, value } => {
            let target = f.fold_expr(target)?;
            let value = f.fold_expr(value)?;
            StmtKind::Set { target, value }
        }
        StmtKind::Expr(expr) => StmtKind::Expr(f.fold_expr(expr)?),
        StmtKind::Return(value) => StmtKind::Return(value.map(|e| f.fold_expr(e)).transpose()?),
        StmtKind::If {
            branches,
            else_block,
        } => {
            let branches = branches
                .into_iter()
                .map(|CondBranch { cond, block }| {
                    let cond = f.fold_expr(cond)?;
                    let block = f.fold_block(block)?;
                    Ok::<_, F::Error>(CondBranch { cond, block })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let else_block = else_block.map(|b| f.fold_block(b)).transpose()?;
            StmtKind::If {
                branches,
                else_block,
            }
        }
        StmtKind::While { cond, body } => {
            let cond = f.fold_expr(cond)?;
            let body = f.fold_block(body)?;
            StmtKind::While { cond, body }
        }
        StmtKind::For {
            pattern,
            iterable,
            body,
        } => f.fold_for(pattern, iterable, body)?,
        StmtKind::Repeat { body, until, fixup } => f.fold_repeat(body, until, fixup)?,
        StmtKind::Block(block) => StmtKind::Block(f.fold_block(block)?),
    };
    Ok(Stmt { kind, span })
}

pub fn walk_for<F: Folder + ?Sized>(
    f: &mut F,
    pattern: BindingPattern,
    iterable: Expr,
    body: Block,
) -> Result<StmtKind, F::Error> {
    let iterable = f.fold_expr(iterable)?;
    let pattern = f.fold_binding_pattern(pattern)?;
    let body = f.fold_block(body)?;
    Ok(StmtKind::For {
        pattern,
        iterable,
        body,
    })
}

pub fn walk_repeat<F: Folder + ?Sized>(
    f: &mut F,
    body: Block,
    until: Expr,
    fixup: Option<Block>,
) -> Result<StmtKind, F::Error> {
    let body = f.fold_block(body)?;
    let until = f.fold_expr(until)?;
    let fixup = fixup.map(|b| f.fold_block(b)).transpose()?;
    Ok(StmtKind::Repeat { body, until, fixup })
}

pub fn walk_binding_pattern<F: Folder + ?Sized>(
    f: &mut F,
    pattern: BindingPattern,
) -> Result<BindingPattern, F::Error> {
    match pattern {
        BindingPattern::Tuple(elems, span) => {
            let elems = elems
                .into_iter()
                .map(|elem| f.fold_binding_pattern(elem))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(BindingPattern::Tuple(elems, span))
        }
        leaf @ (BindingPattern::Name(_)
        | BindingPattern::Discarded(_)
        | BindingPattern::Invalid(_)) => Ok(leaf),
    }
}

pub fn walk_expr<F: Folder + ?Sized>(f: &mut F, expr: Expr) -> Result<Expr, F::Error> {
    let Expr { kind, span } = expr;
    ensure_sufficient_stack(|| {
        let kind = match kind {
            ExprKind::Ident { symbol, type_args } => {
                return f.fold_identifier(symbol, type_args, span);
            }
            lit @ (ExprKind::Int(_) | ExprKind::Bool(_) | ExprKind::Str(_) | ExprKind::Unit) => {
                lit
            }
            ExprKind::Unary { op, operand } => ExprKind::Unary {
                op,
                operand: Box::new(f.fold_expr(*operand)?),
            },
            ExprKind::Binary { op, lhs, rhs } => {
                let lhs = f.fold_expr(*lhs)?;
                let rhs = f.fold_expr(*rhs)?;
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                }
            }
            ExprKind::Call { callee, args } => {
                let callee = f.fold_expr(*callee)?;
                let args = walk_exprs(f, args)?;
                ExprKind::Call {
                    callee: Box::new(callee),
                    args,
                }
            }
            ExprKind::Index { base, index } => {
                let base = f.fold_expr(*base)?;
                let index = f.fold_expr(*index)?;
                ExprKind::Index {
                    base: Box::new(base),
                    index: Box::new(index),
                }
            }
            ExprKind::Tuple(items) => ExprKind::Tuple(walk_exprs(f, items)?),
            ExprKind::Array(items) => ExprKind::Array(walk_exprs(f, items)?),
        };
        Ok(Expr::new(kind, span))
    })
}

pub fn walk_exprs<F: Folder + ?Sized>(f: &mut F, exprs: Vec<Expr>) -> Result<Vec<Expr>, F::Error> {
    exprs.into_iter().map(|e| f.fold_expr(e)).collect()
}

#[cfg(test)]
mod tests;
