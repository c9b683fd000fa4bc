//! Check that a callable binds every name at most once.
//!
//! Holds for any output of the renamer. Runs after each transform in debug
//! builds and on request from the command line.

use rustc_hash::FxHashMap;
use uniq_ir::visitor::{walk_binding_pattern, walk_params};
use uniq_ir::{BindingPattern, Callable, Name, ParamDecl, Visitor};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("callable `{callable}` binds {} more than once", join(.duplicates))]
pub struct DuplicateBindings {
    pub callable: Name,
    /// Each repeated name once, in order of first appearance.
    pub duplicates: Vec<Name>,
}

fn join(names: &[Name]) -> String {
    names
        .iter()
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collects parameter and pattern names.
struct BindingCollector<'ast> {
    names: Vec<&'ast Name>,
}

impl<'ast> Visitor<'ast> for BindingCollector<'ast> {
    fn visit_params(&mut self, params: &'ast ParamDecl) {
        if let ParamDecl::Named(decl) = params {
            self.names.push(&decl.name);
        }
        walk_params(self, params);
    }

    fn visit_binding_pattern(&mut self, pattern: &'ast BindingPattern) {
        if let BindingPattern::Name(decl) = pattern {
            self.names.push(&decl.name);
        }
        walk_binding_pattern(self, pattern);
    }
}

/// Every name bound in `callable`, in traversal order. Parameters first.
pub fn binding_names(callable: &Callable) -> Vec<&Name> {
    let mut collector = BindingCollector { names: Vec::new() };
    collector.visit_callable(callable);
    collector.names
}

pub fn validate_unique_bindings(callable: &Callable) -> Result<(), DuplicateBindings> {
    let names = binding_names(callable);
    let mut counts: FxHashMap<&Name, usize> = FxHashMap::default();
    for name in &names {
        *counts.entry(*name).or_default() += 1;
    }

    let mut duplicates = Vec::new();
    for name in names {
        if let Some(count) = counts.get_mut(&name) {
            if *count > 1 {
                duplicates.push(name.clone());
                // Report each name once.
                *count = 0;
            }
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(DuplicateBindings {
            callable: callable.name.clone(),
            duplicates,
        })
    }
}
