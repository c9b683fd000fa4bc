//! Syntax tree for Uniq programs.
//!
//! Owned, boxed tree: passes consume a node and rebuild it (see
//! [`crate::fold`]), so no arena is needed.
//!
//! # Node categories
//! - Items: [`Module`], [`Callable`], [`ParamDecl`]
//! - Statements: [`Block`], [`Stmt`], [`StmtKind`]
//! - Binding sites: [`BindingPattern`], [`LocalDecl`]
//! - Expressions: [`Expr`], [`ExprKind`], [`Symbol`]
//! - Type annotations: [`TypeExpr`]

mod expr;
mod items;
mod operators;
mod patterns;
mod stmt;
mod types;

pub use expr::{Expr, ExprKind, QualifiedName, Symbol};
pub use items::{Callable, Module, ParamDecl};
pub use operators::{BinaryOp, UnaryOp};
pub use patterns::{BindingPattern, LocalDecl};
pub use stmt::{Block, CondBranch, Stmt, StmtKind};
pub use types::TypeExpr;
