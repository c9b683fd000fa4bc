//! Uniq CLI
//!
//! Unique local variable names for block-scoped callables.

use uniqc::commands::{
    demangle_names, format_file, parse_file, parse_rename_options, rename_file, CommandError,
};
use uniqc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "rename" => {
            if args.len() < 3 {
                eprintln!("Usage: uniq rename <file.uq> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --verify      Check that every binding is unique afterwards");
                eprintln!("  --parallel    Rename callables in parallel");
                eprintln!("  -o <path>     Output file (default: stdout)");
                std::process::exit(1);
            }
            parse_rename_options(&args[2..])
                .and_then(|options| rename_file(&options))
                .map(|output| {
                    if let Some(text) = output {
                        print!("{text}");
                    }
                })
        }
        "fmt" => {
            if args.len() < 3 {
                eprintln!("Usage: uniq fmt <file.uq>");
                std::process::exit(1);
            }
            format_file(&args[2]).map(|text| print!("{text}"))
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: uniq parse <file.uq>");
                std::process::exit(1);
            }
            parse_file(&args[2]).map(|text| print!("{text}"))
        }
        "demangle" => {
            if args.len() < 3 {
                eprintln!("Usage: uniq demangle <name>...");
                eprintln!("Example: uniq demangle __var2__x__");
                std::process::exit(1);
            }
            print!("{}", demangle_names(&args[2..]));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("Uniq {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(error) = result {
        report(&error);
        std::process::exit(1);
    }
}

fn report(error: &CommandError) {
    eprint!("{}", error.render());
    if matches!(error, CommandError::Usage(_)) {
        eprintln!("Run `uniq help` for usage.");
    }
}

fn print_usage() {
    println!("Uniq: unique local variable names");
    println!();
    println!("Usage: uniq <command> [options]");
    println!();
    println!("Commands:");
    println!("  rename <file.uq>     Rename every local binding to a unique name");
    println!("  fmt <file.uq>        Print a file in canonical layout");
    println!("  parse <file.uq>      Parse and display the syntax tree");
    println!("  demangle <name>...   Recover the base of generated names");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Rename options:");
    println!("  --verify            Check that every binding is unique afterwards");
    println!("  --parallel          Rename callables in parallel");
    println!("  -o <path>           Output file (default: stdout)");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=uniq_rename=trace   Trace every generated name and lookup");
    println!("  UNIQ_LOG_TREE=1              Indent log output by span");
}
