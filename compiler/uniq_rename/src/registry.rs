//! Allocation of collision-free names within one callable.

use rustc_hash::FxHashSet;
use tracing::trace;
use uniq_ir::Name;

use crate::mangle::{demangle, mangle};

/// Every name handed out (or reserved) for the current callable.
///
/// Uniqueness is global to the callable, not per scope: once a name is
/// allocated it is never produced again until [`NameRegistry::clear`].
#[derive(Debug, Default)]
pub struct NameRegistry {
    allocated: FxHashSet<Name>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh name for `candidate`.
    ///
    /// The candidate is demangled first, so renaming an already renamed
    /// program keeps the original base. The bare base is used if free,
    /// otherwise the lowest free disambiguator `1, 2, ...`. Cost is linear in
    /// the number of earlier allocations sharing the base.
    pub fn generate(&mut self, candidate: &str) -> Name {
        let base = demangle(candidate);
        let mut counter = 0u64;
        let name = loop {
            let attempt = mangle(counter, base);
            if !self.allocated.contains(attempt.as_str()) {
                break Name::from(attempt);
            }
            counter += 1;
        };
        trace!(candidate, %name, collisions = counter, "allocated name");
        self.allocated.insert(name.clone());
        name
    }

    /// Mark `name` as taken without binding anything to it.
    pub fn reserve(&mut self, name: Name) {
        self.allocated.insert(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.allocated.contains(name)
    }

    pub fn len(&self) -> usize {
        self.allocated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allocated.is_empty()
    }

    pub fn clear(&mut self) {
        self.allocated.clear();
    }
}
