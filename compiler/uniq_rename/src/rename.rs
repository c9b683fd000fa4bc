//! The renaming pass.
//!
//! [`UniqueVariableNames`] is a [`Folder`] that overrides callable entry,
//! parameters, blocks, `for`, `repeat`, binding patterns and identifiers.
//! Every other node is rebuilt by the default walkers.
//!
//! # Scoping
//!
//! - Parameters are bound in the root frame before the body is visited.
//! - Every block pushes a frame, unless the share flag is set, in which
//!   case it reuses the current frame and clears the flag.
//! - `repeat` pushes one frame for the whole statement and sets the share
//!   flag, so the body, the `until` condition and the fixup all see the
//!   locals declared in the body. The fixup block still gets a frame of its
//!   own nested inside the shared one.
//! - `for` folds its iterable in the enclosing scope, then pushes a frame
//!   holding the loop variables. The body block nests inside it.
//!
//! # Free names
//!
//! A `Local` reference that no frame resolves is left untouched. Because the
//! first binding of a base keeps the bare base, such a reference could end up
//! spelled like a generated local (`foo(); let foo = 1;`, or a binding named
//! `__var1__foo__` that demangles to `foo`). A read-only scan
//! ([`free_locals`]) collects those references before the fold starts and
//! they are reserved in the registry, so no binding is ever given one of
//! their names.

use rayon::prelude::*;
use tracing::debug;
use uniq_ir::fold::{walk_binding_pattern, walk_block, walk_callable, walk_params, walk_repeat};
use uniq_ir::{
    BindingPattern, Block, Callable, Expr, ExprKind, Folder, Module, Name, ParamDecl, Span,
    StmtKind, Symbol, TypeExpr,
};

use crate::context::RenameContext;
use crate::free::free_locals;
use crate::scope::ScopeError;
use crate::validate::validate_unique_bindings;

/// Renaming one callable failed. Always a bug in the pass, never in the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("renaming `{callable}`: {source}")]
pub struct RenameError {
    pub callable: Name,
    pub source: ScopeError,
}

/// Alpha-renaming folder.
///
/// State is reset at the start of every callable, so one instance can
/// rename any number of callables in sequence. It is not shareable between
/// threads mid-callable; [`rename_module_parallel`] gives each callable its
/// own instance.
#[derive(Debug, Default)]
pub struct UniqueVariableNames {
    ctx: RenameContext,
}

impl UniqueVariableNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename every local of `callable`.
    pub fn transform(&mut self, callable: Callable) -> Result<Callable, RenameError> {
        let name = callable.name.clone();
        self.fold_callable(callable)
            .map_err(|source| RenameError {
                callable: name,
                source,
            })
    }
}

impl Folder for UniqueVariableNames {
    type Error = ScopeError;

    #[tracing::instrument(level = "debug", skip_all, fields(callable = %callable.name))]
    fn fold_callable(&mut self, callable: Callable) -> Result<Callable, ScopeError> {
        let free = free_locals(&callable);
        if !free.is_empty() {
            debug!(?free, "reserving free references");
        }
        self.ctx.reset(free.iter().cloned());
        let renamed = walk_callable(self, callable)?;
        let depth = self.ctx.scope_depth();
        if depth != 1 {
            return Err(ScopeError::Unbalanced { depth });
        }
        debug!(bindings = self.ctx.registry().len(), "renamed");

        debug_assert_eq!(self.ctx.unresolved_names(), free);
        debug_assert!(
            validate_unique_bindings(&renamed).is_ok(),
            "renamed callable `{}` binds a name twice",
            renamed.name,
        );
        Ok(renamed)
    }

    fn fold_params(&mut self, params: ParamDecl) -> Result<ParamDecl, ScopeError> {
        match params {
            ParamDecl::Named(decl) => {
                let unique = self.ctx.declare(&decl.name)?;
                Ok(ParamDecl::Named(decl.with_name(unique)))
            }
            params => walk_params(self, params),
        }
    }

    fn fold_block(&mut self, block: Block) -> Result<Block, ScopeError> {
        if self.ctx.take_shared_scope() {
            return walk_block(self, block);
        }
        self.ctx.enter_scope();
        let block = walk_block(self, block)?;
        self.ctx.exit_scope()?;
        Ok(block)
    }

    fn fold_for(
        &mut self,
        pattern: BindingPattern,
        iterable: Expr,
        body: Block,
    ) -> Result<StmtKind, ScopeError> {
        let iterable = self.fold_expr(iterable)?;
        self.ctx.enter_scope();
        let pattern = self.fold_binding_pattern(pattern)?;
        let body = self.fold_block(body)?;
        self.ctx.exit_scope()?;
        Ok(StmtKind::For {
            pattern,
            iterable,
            body,
        })
    }

    fn fold_repeat(
        &mut self,
        body: Block,
        until: Expr,
        fixup: Option<Block>,
    ) -> Result<StmtKind, ScopeError> {
        self.ctx.enter_scope();
        self.ctx.share_next_scope();
        let kind = walk_repeat(self, body, until, fixup)?;
        self.ctx.exit_scope()?;
        Ok(kind)
    }

    fn fold_binding_pattern(
        &mut self,
        pattern: BindingPattern,
    ) -> Result<BindingPattern, ScopeError> {
        match pattern {
            BindingPattern::Name(decl) => {
                let unique = self.ctx.declare(&decl.name)?;
                Ok(BindingPattern::Name(decl.with_name(unique)))
            }
            pattern => walk_binding_pattern(self, pattern),
        }
    }

    fn fold_identifier(
        &mut self,
        symbol: Symbol,
        type_args: Option<Vec<TypeExpr>>,
        span: Span,
    ) -> Result<Expr, ScopeError> {
        let symbol = match symbol {
            Symbol::Local(name) => Symbol::Local(self.ctx.resolve(&name).unwrap_or(name)),
            global @ Symbol::Global(_) => global,
        };
        Ok(Expr::new(ExprKind::Ident { symbol, type_args }, span))
    }
}

/// Rename one callable with a fresh renamer.
pub fn rename_callable(callable: Callable) -> Result<Callable, RenameError> {
    UniqueVariableNames::new().transform(callable)
}

/// Rename every callable of `module` in order, reusing one renamer.
#[tracing::instrument(level = "debug", skip_all, fields(callables = module.callables.len()))]
pub fn rename_module(module: Module) -> Result<Module, RenameError> {
    let mut renamer = UniqueVariableNames::new();
    let callables = module
        .callables
        .into_iter()
        .map(|callable| renamer.transform(callable))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Module { callables })
}

/// Rename the callables of `module` concurrently, one renamer per callable.
///
/// Output order matches input order. If several callables fail, which
/// error is returned is unspecified.
#[tracing::instrument(level = "debug", skip_all, fields(callables = module.callables.len()))]
pub fn rename_module_parallel(module: Module) -> Result<Module, RenameError> {
    let callables = module
        .callables
        .into_par_iter()
        .map(rename_callable)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Module { callables })
}
