//! The `fmt` command: print a source file in canonical layout.

use super::{parse_text, read_file, CommandError};

pub fn format_source(path: &str, text: &str) -> Result<String, CommandError> {
    let module = parse_text(path, text)?;
    Ok(uniq_fmt::format_module(&module))
}

pub fn format_file(path: &str) -> Result<String, CommandError> {
    let text = read_file(path)?;
    format_source(path, &text)
}
