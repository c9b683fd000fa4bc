//! The `demangle` command: recover the human-written base of generated names.

use uniq_rename::demangle;

/// One line per name. Names that are not tagged are printed unchanged.
pub fn demangle_names(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(demangle(name));
        out.push('\n');
    }
    out
}
