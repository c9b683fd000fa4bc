//! Uniq Formatter
//!
//! Prints [`uniq_ir`] trees as source text. Used to show the output of a
//! pass and to compare trees in tests without caring about spans.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - [`printer`]: node-by-node rendering

pub mod emitter;
pub mod printer;

pub use emitter::{Emitter, StringEmitter};
pub use printer::Printer;

use uniq_ir::{Callable, Expr, Module};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Print a whole module, ending in a newline.
pub fn format_module(module: &Module) -> String {
    let mut out = StringEmitter::new();
    Printer::new(&mut out).module(module);
    out.output()
}

/// Print one callable, ending in a newline.
pub fn format_callable(callable: &Callable) -> String {
    let mut out = StringEmitter::new();
    Printer::new(&mut out).callable(callable);
    out.ensure_trailing_newline();
    out.output()
}

pub fn format_expr(expr: &Expr) -> String {
    let mut out = StringEmitter::new();
    Printer::new(&mut out).expr(expr);
    out.output()
}
