//! Mutable state of one renaming traversal.
//!
//! Owned by the renamer and reset at the start of every callable; nothing
//! carries over from one callable to the next.

use rustc_hash::FxHashSet;
use tracing::trace;
use uniq_ir::Name;

use crate::registry::NameRegistry;
use crate::scope::{ScopeError, ScopeStack};

#[derive(Debug, Default)]
pub struct RenameContext {
    registry: NameRegistry,
    scopes: ScopeStack,
    /// Single-shot: the next block reuses the current frame instead of
    /// pushing its own.
    share_next_scope: bool,
    /// Local references that no frame resolved.
    unresolved: FxHashSet<Name>,
}

impl RenameContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything and start a new callable. `reserved` names are
    /// marked taken so no binding is ever given one of them.
    pub fn reset(&mut self, reserved: impl IntoIterator<Item = Name>) {
        self.registry.clear();
        for name in reserved {
            self.registry.reserve(name);
        }
        self.scopes.reset();
        self.share_next_scope = false;
        self.unresolved.clear();
    }

    /// Allocate a unique name for a new binding of `original` and bind it in
    /// the innermost frame.
    pub fn declare(&mut self, original: &Name) -> Result<Name, ScopeError> {
        let unique = self.registry.generate(original.as_str());
        self.scopes.bind(original.clone(), unique.clone())?;
        Ok(unique)
    }

    /// Unique name currently bound to `original`.
    ///
    /// Misses are remembered for [`RenameContext::unresolved_names`].
    pub fn resolve(&mut self, original: &Name) -> Option<Name> {
        if let Some(unique) = self.scopes.lookup(original.as_str()) {
            trace!(%original, %unique, "resolved");
            return Some(unique.clone());
        }
        trace!(%original, "unresolved, left as is");
        self.unresolved.insert(original.clone());
        None
    }

    pub fn enter_scope(&mut self) {
        self.scopes.enter();
        trace!(depth = self.scopes.depth(), "enter scope");
    }

    pub fn exit_scope(&mut self) -> Result<(), ScopeError> {
        self.scopes.exit()?;
        trace!(depth = self.scopes.depth(), "exit scope");
        Ok(())
    }

    /// Make the next block share the current frame.
    pub fn share_next_scope(&mut self) {
        self.share_next_scope = true;
    }

    /// Consume the share flag, returning whether it was set.
    pub fn take_shared_scope(&mut self) -> bool {
        std::mem::take(&mut self.share_next_scope)
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Every local reference no frame resolved, sorted.
    pub fn unresolved_names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.unresolved.iter().cloned().collect();
        names.sort();
        names
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }
}
