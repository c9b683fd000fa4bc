//! Tree-to-text rendering.
//!
//! One statement per line, four-space indentation, and only the
//! parentheses operator precedence requires. Output parses back to the same
//! tree, spans aside.

use uniq_ir::{
    BindingPattern, Block, Callable, Expr, ExprKind, Module, ParamDecl, Stmt, StmtKind, Symbol,
    TypeExpr, UnaryOp,
};
use uniq_stack::ensure_sufficient_stack;

use crate::emitter::Emitter;

/// Binding power of postfix call and index.
const POSTFIX: u8 = UnaryOp::PRECEDENCE + 1;
/// Literals, identifiers and bracketed forms never need parentheses.
const ATOM: u8 = POSTFIX + 1;

pub struct Printer<'e, E: Emitter> {
    out: &'e mut E,
    indent: usize,
}

impl<'e, E: Emitter> Printer<'e, E> {
    pub fn new(out: &'e mut E) -> Self {
        Printer { out, indent: 0 }
    }

    /// Callables separated by a blank line.
    pub fn module(&mut self, module: &Module) {
        for (i, callable) in module.callables.iter().enumerate() {
            if i > 0 {
                self.out.emit_newline();
            }
            self.callable(callable);
            self.out.emit_newline();
        }
    }

    pub fn callable(&mut self, callable: &Callable) {
        self.out.emit("fn ");
        self.out.emit(callable.name.as_str());
        self.out.emit("(");
        match &callable.params {
            ParamDecl::Tuple(items, _) => self.comma_separated(items, Self::params),
            single => self.params(single),
        }
        self.out.emit(")");
        self.out.emit_space();
        self.block(&callable.body);
    }

    fn params(&mut self, params: &ParamDecl) {
        match params {
            ParamDecl::Named(decl) => self.local(decl.name.as_str(), decl.ty.as_ref()),
            ParamDecl::Tuple(items, _) => {
                self.out.emit("(");
                self.comma_separated(items, Self::params);
                self.out.emit(")");
            }
            ParamDecl::Unnamed(_) => self.out.emit("_"),
        }
    }

    fn local(&mut self, name: &str, ty: Option<&TypeExpr>) {
        self.out.emit(name);
        if let Some(ty) = ty {
            self.out.emit(": ");
            self.ty(ty);
        }
    }

    pub fn block(&mut self, block: &Block) {
        if block.stmts.is_empty() {
            self.out.emit("{}");
            return;
        }
        ensure_sufficient_stack(|| {
            self.out.emit("{");
            self.out.emit_newline();
            self.indent += 1;
            for stmt in &block.stmts {
                self.out.emit_indent(self.indent);
                self.stmt(stmt);
                self.out.emit_newline();
            }
            self.indent -= 1;
            self.out.emit_indent(self.indent);
            self.out.emit("}");
        });
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Let {
                pattern,
                mutable,
                init,
            } => {
                self.out.emit(if *mutable { "let mut " } else { "let " });
                self.pattern(pattern);
                self.out.emit(" = ");
                self.expr(init);
                self.out.emit(";");
            }
            StmtKind::Set { target, value } => {
                self.out.emit("set ");
                self.expr(target);
                self.out.emit(" = ");
                self.expr(value);
                self.out.emit(";");
            }
            StmtKind::Expr(expr) => {
                self.expr(expr);
                self.out.emit(";");
            }
            StmtKind::Return(None) => self.out.emit("return;"),
            StmtKind::Return(Some(value)) => {
                self.out.emit("return ");
                self.expr(value);
                self.out.emit(";");
            }
            StmtKind::If {
                branches,
                else_block,
            } => {
                for (i, branch) in branches.iter().enumerate() {
                    self.out.emit(if i == 0 { "if " } else { " elif " });
                    self.expr(&branch.cond);
                    self.out.emit_space();
                    self.block(&branch.block);
                }
                if let Some(block) = else_block {
                    self.out.emit(" else ");
                    self.block(block);
                }
            }
            StmtKind::While { cond, body } => {
                self.out.emit("while ");
                self.expr(cond);
                self.out.emit_space();
                self.block(body);
            }
            StmtKind::For {
                pattern,
                iterable,
                body,
            } => {
                self.out.emit("for ");
                self.pattern(pattern);
                self.out.emit(" in ");
                self.expr(iterable);
                self.out.emit_space();
                self.block(body);
            }
            StmtKind::Repeat { body, until, fixup } => {
                self.out.emit("repeat ");
                self.block(body);
                self.out.emit(" until ");
                self.expr(until);
                if let Some(fixup) = fixup {
                    self.out.emit(" fixup ");
                    self.block(fixup);
                }
                self.out.emit(";");
            }
            StmtKind::Block(block) => self.block(block),
        }
    }

    fn pattern(&mut self, pattern: &BindingPattern) {
        match pattern {
            BindingPattern::Name(decl) => self.local(decl.name.as_str(), decl.ty.as_ref()),
            BindingPattern::Tuple(elems, _) => {
                self.out.emit("(");
                self.comma_separated(elems, Self::pattern);
                if elems.len() == 1 {
                    self.out.emit(",");
                }
                self.out.emit(")");
            }
            // An invalid pattern binds nothing, like a discard.
            BindingPattern::Discarded(_) | BindingPattern::Invalid(_) => self.out.emit("_"),
        }
    }

    fn ty(&mut self, ty: &TypeExpr) {
        match ty {
            TypeExpr::Named { name, args, .. } => {
                self.out.emit(name.as_str());
                if !args.is_empty() {
                    self.out.emit("<");
                    self.comma_separated(args, Self::ty);
                    self.out.emit(">");
                }
            }
            TypeExpr::Tuple(elems, _) => {
                self.out.emit("(");
                self.comma_separated(elems, Self::ty);
                self.out.emit(")");
            }
            TypeExpr::Array(elem, _) => {
                self.out.emit("[");
                self.ty(elem);
                self.out.emit("]");
            }
        }
    }

    pub fn expr(&mut self, expr: &Expr) {
        self.expr_at(expr, 0);
    }

    /// Print `expr`, parenthesized if it binds looser than `min_prec`.
    fn expr_at(&mut self, expr: &Expr, min_prec: u8) {
        ensure_sufficient_stack(|| {
            let parens = precedence(expr) < min_prec;
            if parens {
                self.out.emit("(");
            }
            self.expr_kind(&expr.kind);
            if parens {
                self.out.emit(")");
            }
        });
    }

    fn expr_kind(&mut self, kind: &ExprKind) {
        match kind {
            ExprKind::Int(value) => self.out.emit(&value.to_string()),
            ExprKind::Bool(value) => self.out.emit(if *value { "true" } else { "false" }),
            ExprKind::Str(text) => self.out.emit(&quote(text)),
            ExprKind::Unit => self.out.emit("()"),
            ExprKind::Ident { symbol, type_args } => {
                match symbol {
                    Symbol::Local(name) => self.out.emit(name.as_str()),
                    Symbol::Global(path) => self.out.emit(&path.to_string()),
                }
                if let Some(args) = type_args {
                    self.out.emit("::<");
                    self.comma_separated(args, Self::ty);
                    self.out.emit(">");
                }
            }
            ExprKind::Unary { op, operand } => {
                self.out.emit(op.as_symbol());
                self.expr_at(operand, UnaryOp::PRECEDENCE);
            }
            ExprKind::Binary { op, lhs, rhs } => {
                let prec = op.precedence();
                self.expr_at(lhs, prec);
                self.out.emit_space();
                self.out.emit(op.as_symbol());
                self.out.emit_space();
                self.expr_at(rhs, prec + 1);
            }
            ExprKind::Call { callee, args } => {
                self.expr_at(callee, POSTFIX);
                self.out.emit("(");
                self.comma_separated(args, Self::expr);
                self.out.emit(")");
            }
            ExprKind::Index { base, index } => {
                self.expr_at(base, POSTFIX);
                self.out.emit("[");
                self.expr(index);
                self.out.emit("]");
            }
            ExprKind::Tuple(items) => {
                self.out.emit("(");
                self.comma_separated(items, Self::expr);
                if items.len() == 1 {
                    self.out.emit(",");
                }
                self.out.emit(")");
            }
            ExprKind::Array(items) => {
                self.out.emit("[");
                self.comma_separated(items, Self::expr);
                self.out.emit("]");
            }
        }
    }

    fn comma_separated<T>(&mut self, items: &[T], mut print: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.emit(", ");
            }
            print(self, item);
        }
    }
}

fn precedence(expr: &Expr) -> u8 {
    match &expr.kind {
        ExprKind::Binary { op, .. } => op.precedence(),
        ExprKind::Unary { .. } => UnaryOp::PRECEDENCE,
        // Written with a leading `-`, so it reads back as a negation.
        ExprKind::Int(value) if *value < 0 => UnaryOp::PRECEDENCE,
        ExprKind::Call { .. } | ExprKind::Index { .. } => POSTFIX,
        _ => ATOM,
    }
}

/// String literal with escapes the lexer understands.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests;
