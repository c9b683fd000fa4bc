//! Type annotations.
//!
//! Types are carried through passes verbatim; nothing in the pipeline
//! resolves them.

use crate::{Name, Span, Spanned};

/// A written type: `Int`, `Array<Int>`, `(Int, Bool)`, `[Qubit]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExpr {
    Named {
        name: Name,
        args: Vec<TypeExpr>,
        span: Span,
    },
    Tuple(Vec<TypeExpr>, Span),
    Array(Box<TypeExpr>, Span),
}

impl Spanned for TypeExpr {
    fn span(&self) -> Span {
        match self {
            TypeExpr::Named { span, .. } | TypeExpr::Tuple(_, span) | TypeExpr::Array(_, span) => {
                *span
            }
        }
    }
}
