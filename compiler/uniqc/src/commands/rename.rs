//! The `rename` command: give every local binding a unique name.

use std::path::PathBuf;

use uniq_rename::{rename_module, rename_module_parallel, validate_unique_bindings};

use super::{parse_text, read_file, write_file, CommandError};

/// Options for `uniq rename <file> [--verify] [--parallel] [-o <path>]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenameOptions {
    pub input: String,
    /// Re-check binding uniqueness on the output, in release builds too.
    pub verify: bool,
    /// Rename callables on the rayon pool.
    pub parallel: bool,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
}

/// Parse the arguments following `rename`.
pub fn parse_rename_options(args: &[String]) -> Result<RenameOptions, CommandError> {
    let mut options = RenameOptions::default();
    let mut input = None;
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verify" => options.verify = true,
            "--parallel" => options.parallel = true,
            "-o" | "--output" => {
                let Some(path) = args.next() else {
                    return Err(CommandError::Usage(format!("`{arg}` needs a path")));
                };
                options.output = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => {
                return Err(CommandError::Usage(format!("unknown option `{flag}`")));
            }
            path if input.is_none() => input = Some(path.to_string()),
            extra => {
                return Err(CommandError::Usage(format!("unexpected argument `{extra}`")));
            }
        }
    }

    let Some(input) = input else {
        return Err(CommandError::Usage("missing file path".to_string()));
    };
    options.input = input;
    Ok(options)
}

/// Rename every callable in `text` and print the result.
pub fn rename_source(
    path: &str,
    text: &str,
    options: &RenameOptions,
) -> Result<String, CommandError> {
    let module = parse_text(path, text)?;
    let renamed = if options.parallel {
        rename_module_parallel(module)?
    } else {
        rename_module(module)?
    };

    if options.verify {
        for callable in &renamed.callables {
            validate_unique_bindings(callable)?;
        }
        tracing::debug!(callables = renamed.callables.len(), "bindings verified");
    }

    Ok(uniq_fmt::format_module(&renamed))
}

/// Run the command: read, rename, then write to `-o` or return for stdout.
///
/// Returns `None` when the output went to a file.
#[tracing::instrument(level = "debug", skip(options), fields(input = %options.input))]
pub fn rename_file(options: &RenameOptions) -> Result<Option<String>, CommandError> {
    let text = read_file(&options.input)?;
    let renamed = rename_source(&options.input, &text, options)?;
    match &options.output {
        Some(path) => {
            write_file(path, &renamed)?;
            Ok(None)
        }
        None => Ok(Some(renamed)),
    }
}
