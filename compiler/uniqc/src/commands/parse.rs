//! The `parse` command: dump the syntax tree.

use std::fmt::Write as _;

use uniq_rename::binding_names;

use super::{parse_text, read_file, CommandError};

/// One summary line per callable, then the full tree.
pub fn parse_source(path: &str, text: &str) -> Result<String, CommandError> {
    let module = parse_text(path, text)?;
    let mut out = String::new();
    for callable in &module.callables {
        let _ = writeln!(
            out,
            "fn {} @ {}: {} param(s), {} binding(s)",
            callable.name,
            callable.span,
            callable.params.names().len(),
            binding_names(callable).len(),
        );
    }
    let _ = writeln!(out, "{module:#?}");
    Ok(out)
}

pub fn parse_file(path: &str) -> Result<String, CommandError> {
    let text = read_file(path)?;
    parse_source(path, &text)
}
