//! Binding sites.

use super::TypeExpr;
use crate::{Name, Span, Spanned};

/// A single named local: a parameter or a pattern leaf.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LocalDecl {
    pub name: Name,
    pub ty: Option<TypeExpr>,
    pub span: Span,
}

impl LocalDecl {
    pub fn new(name: Name, ty: Option<TypeExpr>, span: Span) -> Self {
        LocalDecl { name, ty, span }
    }

    /// Same declaration under a different name; annotation and span kept.
    #[must_use]
    pub fn with_name(self, name: Name) -> Self {
        LocalDecl { name, ..self }
    }
}

/// Target of `let` and `for`: `x`, `(a, (b, _))`, `_`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindingPattern {
    /// Single named variable.
    Name(LocalDecl),
    /// Tuple destructuring, elements in source order.
    Tuple(Vec<BindingPattern>, Span),
    /// `_`: value is dropped, nothing is bound.
    Discarded(Span),
    /// Placeholder for a pattern that failed to elaborate. Binds nothing.
    Invalid(Span),
}

impl BindingPattern {
    /// Names bound by this pattern, left to right.
    pub fn bound_names(&self) -> Vec<&Name> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a Name>) {
        match self {
            BindingPattern::Name(decl) => out.push(&decl.name),
            BindingPattern::Tuple(elems, _) => {
                for elem in elems {
                    elem.collect_names(out);
                }
            }
            BindingPattern::Discarded(_) | BindingPattern::Invalid(_) => {}
        }
    }
}

impl Spanned for BindingPattern {
    fn span(&self) -> Span {
        match self {
            BindingPattern::Name(decl) => decl.span,
            BindingPattern::Tuple(_, span)
            | BindingPattern::Discarded(span)
            | BindingPattern::Invalid(span) => *span,
        }
    }
}
