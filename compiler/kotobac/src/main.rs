//! Kotoba CLI.

use kotobac::commands::{explain_error, lex_file, parse_run_args, run_file, EXIT_FAILURE};
use kotobac::init_tracing;

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let code = match command.as_str() {
        "run" => match parse_run_args(&args[2..]) {
            Ok(options) => run_file(&options),
            Err(message) => {
                eprintln!("{message}");
                eprintln!("Usage: kotoba run <file> [--silent] [--no-console] [--first-line=<n>]");
                EXIT_FAILURE
            }
        },
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: kotoba lex <file>");
                EXIT_FAILURE
            } else {
                lex_file(&args[2], 1)
            }
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: kotoba explain <ERROR_CODE>");
                eprintln!("Example: kotoba explain E1003");
                EXIT_FAILURE
            } else {
                explain_error(&args[2])
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("Kotoba {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("Kotoba interpreter");
    println!();
    println!("Usage: kotoba <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Run a script");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E1003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --silent, -s         Discard all output");
    println!("  --no-console         Do not bind コンソール and 警告");
    println!("  --first-line=<n>     Number the first line n (default: 1)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Log filter, e.g. kotoba_eval=debug");
}
