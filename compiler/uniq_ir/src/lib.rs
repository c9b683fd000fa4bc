//! Uniq IR - syntax tree and traversals
//!
//! This crate contains the data structures shared by every Uniq pass:
//! - [`Span`] for source locations
//! - [`Name`] for identifier text
//! - AST nodes ([`ast`]): callables, blocks, statements, patterns, expressions
//! - [`visitor::Visitor`] for read-only walks
//! - [`fold::Folder`] for owning, rebuilding transformations
//!
//! # Design
//!
//! - **Closed node sets**: every node category is an enum; passes match
//!   exhaustively instead of overriding virtual methods.
//! - **Override points, not inheritance**: a pass implements `Folder`,
//!   overrides the handful of `fold_*` methods it cares about, and relies on
//!   the `walk_*` defaults for everything else.

pub mod ast;
pub mod fold;
mod name;
mod span;
pub mod visitor;

pub use ast::{
    BinaryOp, BindingPattern, Block, Callable, CondBranch, Expr, ExprKind, LocalDecl, Module,
    ParamDecl, QualifiedName, Stmt, StmtKind, Symbol, TypeExpr, UnaryOp,
};
pub use fold::Folder;
pub use name::Name;
pub use span::{Span, SpanError, Spanned};
pub use visitor::Visitor;
