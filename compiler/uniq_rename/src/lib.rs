//! Uniq Rename
//!
//! Alpha-renaming for one callable at a time: every local binding gets a
//! name no other binding in the same callable uses, and every reference is
//! rewritten to the name of the binding it resolves to. Later passes can
//! then identify variables by name alone.
//!
//! # Naming
//!
//! The first binding of a name keeps it. Later bindings of the same base get
//! a tagged name `__var{N}__{base}__` with the lowest free `N`. [`demangle`]
//! recovers the base, and renaming an already renamed callable keeps every
//! base stable.
//!
//! # Modules
//!
//! - [`mangle`]: tagged-name format, [`demangle`]
//! - [`registry`]: per-callable set of allocated names
//! - [`scope`]: lexical frames from source name to unique name
//! - [`context`]: registry, scope stack and share flag bundled for one traversal
//! - [`free`]: read-only scan for references no binding declares
//! - [`rename`]: the [`UniqueVariableNames`] folder and module drivers
//! - [`validate`]: duplicate-binding check run on every result in debug builds
//!
//! ```text
//! fn f(x) {                     fn f(x) {
//!     let x = x + 1;                let __var1__x__ = x + 1;
//!     {                             {
//!         let x = x * 2;    =>          let __var2__x__ = __var1__x__ * 2;
//!         return x;                     return __var2__x__;
//!     }                             }
//!     return x;                     return __var1__x__;
//! }                             }
//! ```

pub mod context;
pub mod free;
pub mod mangle;
pub mod registry;
pub mod rename;
pub mod scope;
pub mod validate;

pub use context::RenameContext;
pub use free::free_locals;
pub use mangle::{demangle, is_mangled, mangle, MangledName};
pub use registry::NameRegistry;
pub use rename::{
    rename_callable, rename_module, rename_module_parallel, RenameError, UniqueVariableNames,
};
pub use scope::{ScopeError, ScopeStack};
pub use validate::{binding_names, validate_unique_bindings, DuplicateBindings};
