//! Expression nodes.

use std::fmt;

use super::{BinaryOp, TypeExpr, UnaryOp};
use crate::{Name, Span, Spanned};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Unannotated reference to a local variable.
    pub fn local(name: impl Into<Name>, span: Span) -> Self {
        Expr::new(
            ExprKind::Ident {
                symbol: Symbol::Local(name.into()),
                type_args: None,
            },
            span,
        )
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// What an identifier refers to.
///
/// The parser classifies single-segment names as `Local` and `::` paths as
/// `Global`. A `Local` that no enclosing binding declares (a call to a
/// top-level callable, say) is left alone by every local-variable pass.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    Local(Name),
    Global(QualifiedName),
}

/// `Namespace::Inner::item`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedName {
    pub namespace: Vec<Name>,
    pub name: Name,
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.namespace {
            write!(f, "{segment}::")?;
        }
        write!(f, "{}", self.name)
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Int(i64),
    Bool(bool),
    /// String literal, unescaped.
    Str(String),
    /// `()`
    Unit,

    /// Identifier reference with optional explicit type arguments: `f::<Int>`.
    Ident {
        symbol: Symbol,
        type_args: Option<Vec<TypeExpr>>,
    },

    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Index {
        base: Box<Expr>,
        index: Box<Expr>,
    },

    Tuple(Vec<Expr>),
    Array(Vec<Expr>),
}
