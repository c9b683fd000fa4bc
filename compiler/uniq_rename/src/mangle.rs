//! Tagged names.
//!
//! A name generated after a collision has the form `__var{counter}__{base}__`:
//! the tag, a decimal disambiguator and the human-written base name.
//! Disambiguator 0 is never written out; the first binding of a base keeps
//! the base itself.
//!
//! Parsing is structural (tag, digits, delimiter, base, delimiter) rather
//! than pattern based, so a base that itself contains `__` or digits
//! round-trips exactly.

use std::fmt;

/// Prefix marking a generated name.
pub const TAG: &str = "__var";

/// Separates the disambiguator from the base and terminates the base.
pub const DELIMITER: &str = "__";

/// The parts of a tagged name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MangledName<'a> {
    pub counter: u64,
    pub base: &'a str,
}

impl<'a> MangledName<'a> {
    /// Split `name` into disambiguator and base, or `None` if it is not a
    /// tagged name (missing tag, no digits, a leading zero, counter overflow,
    /// empty base, missing delimiters).
    ///
    /// Only the spelling [`mangle`] produces is accepted, so a parsed name
    /// always prints back unchanged. Counter 0 is never tagged.
    pub fn parse(name: &'a str) -> Option<Self> {
        let rest = name.strip_prefix(TAG)?;
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || rest.starts_with('0') {
            return None;
        }
        let counter = rest[..digits].parse().ok()?;
        let base = rest[digits..]
            .strip_prefix(DELIMITER)?
            .strip_suffix(DELIMITER)?;
        if base.is_empty() {
            return None;
        }
        Some(MangledName { counter, base })
    }
}

impl fmt::Display for MangledName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TAG}{}{DELIMITER}{}{DELIMITER}", self.counter, self.base)
    }
}

/// Spell `base` with disambiguator `counter`. Counter 0 is the bare base.
pub fn mangle(counter: u64, base: &str) -> String {
    if counter == 0 {
        base.to_string()
    } else {
        MangledName { counter, base }.to_string()
    }
}

pub fn is_mangled(name: &str) -> bool {
    MangledName::parse(name).is_some()
}

/// Recover the human-written base of `name`.
///
/// Strips every tag layer, so `demangle(demangle(n)) == demangle(n)`.
/// Names that are not tagged come back unchanged.
pub fn demangle(name: &str) -> &str {
    let mut current = name;
    while let Some(parts) = MangledName::parse(current) {
        current = parts.base;
    }
    current
}
