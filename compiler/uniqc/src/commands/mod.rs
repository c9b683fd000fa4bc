//! Command handlers for the `uniq` CLI.
//!
//! Each submodule implements one command. Shared pieces (file I/O, parsing
//! with a rendered report, the error type) live here in the module root.

use std::io;
use std::ops::Range;
use std::path::Path;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use uniq_ir::{Module, Spanned};
use uniq_parse::ParseError;
use uniq_rename::{DuplicateBindings, RenameError};

mod demangle;
mod fmt;
mod parse;
mod rename;

pub use demangle::demangle_names;
pub use fmt::{format_file, format_source};
pub use parse::{parse_file, parse_source};
pub use rename::{parse_rename_options, rename_file, rename_source, RenameOptions};

/// Anything that makes a command fail.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{}", read_message(path, error))]
    Read { path: String, error: io::Error },

    #[error("cannot write '{path}': {error}")]
    Write { path: String, error: io::Error },

    #[error("{path}: {error}")]
    Parse {
        path: String,
        text: String,
        error: ParseError,
    },

    #[error(transparent)]
    Rename(#[from] RenameError),

    #[error("verification failed: {0}")]
    Verify(#[from] DuplicateBindings),

    #[error("{0}")]
    Usage(String),
}

impl CommandError {
    /// Text for stderr. Parse errors get a labelled source snippet.
    pub fn render(&self) -> String {
        match self {
            CommandError::Parse { path, text, error } => render_parse_error(path, text, error),
            other => format!("error: {other}\n"),
        }
    }
}

fn read_message(path: &str, error: &io::Error) -> String {
    match error.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {error}"),
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|error| CommandError::Read {
        path: path.to_string(),
        error,
    })
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), CommandError> {
    std::fs::write(path, contents).map_err(|error| CommandError::Write {
        path: path.display().to_string(),
        error,
    })
}

/// Parse `text`, keeping what a report needs if it fails.
pub(crate) fn parse_text(path: &str, text: &str) -> Result<Module, CommandError> {
    uniq_parse::parse_module(text).map_err(|error| CommandError::Parse {
        path: path.to_string(),
        text: text.to_string(),
        error,
    })
}

/// Render a parse error against its source without colors.
pub fn render_parse_error(path: &str, text: &str, error: &ParseError) -> String {
    let range = error.span().to_range();
    let mut out = Vec::new();
    let written = Report::<(&str, Range<usize>)>::build(ReportKind::Error, path, range.start)
        .with_config(
            Config::default()
                .with_color(false)
                .with_index_type(IndexType::Byte),
        )
        .with_message(error.to_string())
        .with_label(Label::new((path, range)).with_message(error.label()))
        .finish()
        .write((path, Source::from(text)), &mut out);
    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => format!("error: {path}: {error}\n"),
    }
}
