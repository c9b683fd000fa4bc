//! Stack growth for recursive descent.
//!
//! The parser and every tree walker recurse once per nesting level, so a
//! source file with thousands of nested blocks or parenthesized expressions
//! would overflow a fixed thread stack. Wrapping the recursive step in
//! [`ensure_sufficient_stack`] moves execution onto a freshly allocated
//! segment whenever the remaining stack runs low.
//!
//! On `wasm32` the wrapper is a plain call.

/// Grow when less than this much stack remains (128 KiB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2 MiB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
