//! Top-level items.

use super::{Block, LocalDecl};
use crate::{Name, Span, Spanned};

/// A parsed source file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Module {
    pub callables: Vec<Callable>,
}

/// `fn name(params) { body }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Callable {
    pub name: Name,
    pub params: ParamDecl,
    pub body: Block,
    pub span: Span,
}

impl Spanned for Callable {
    fn span(&self) -> Span {
        self.span
    }
}

/// Parameter structure of a callable.
///
/// A callable always has exactly one `ParamDecl`; several parameters are a
/// `Tuple`, no parameters an empty `Tuple`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamDecl {
    Named(LocalDecl),
    Tuple(Vec<ParamDecl>, Span),
    /// `_`: accepted but never referenced.
    Unnamed(Span),
}

impl ParamDecl {
    /// Parameter names in declaration order.
    pub fn names(&self) -> Vec<&Name> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a Name>) {
        match self {
            ParamDecl::Named(decl) => out.push(&decl.name),
            ParamDecl::Tuple(items, _) => {
                for item in items {
                    item.collect_names(out);
                }
            }
            ParamDecl::Unnamed(_) => {}
        }
    }
}
