//! Statements and blocks.

use std::fmt;

use super::{BindingPattern, Expr};
use crate::{Span, Spanned};

/// `{ stmt* }`: a lexical scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Block { stmts, span }
    }
}

impl Spanned for Block {
    fn span(&self) -> Span {
        self.span
    }
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// One `if`/`elif` arm.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CondBranch {
    pub cond: Expr,
    pub block: Block,
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `let pattern = init;` / `let mut pattern = init;`
    ///
    /// `init` is evaluated before `pattern` comes into scope.
    Let {
        pattern: BindingPattern,
        mutable: bool,
        init: Expr,
    },

    /// `set target = value;` Reassigns existing locals; binds nothing.
    Set { target: Expr, value: Expr },

    /// Expression statement.
    Expr(Expr),

    Return(Option<Expr>),

    /// `if c { } elif d { } else { }`
    If {
        branches: Vec<CondBranch>,
        else_block: Option<Block>,
    },

    While { cond: Expr, body: Block },

    /// `for pattern in iterable { }`
    For {
        pattern: BindingPattern,
        iterable: Expr,
        body: Block,
    },

    /// `repeat { } until cond fixup { };`
    ///
    /// `until` and `fixup` see the locals declared in `body`.
    Repeat {
        body: Block,
        until: Expr,
        fixup: Option<Block>,
    },

    /// Nested block statement.
    Block(Block),
}
