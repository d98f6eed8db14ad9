//! Alba CLI
//!
//! Tokenizes Alba sources and prints the highlighting tables.

use albac::commands::{lex_files, list_languages, list_styles, LexOptions};

fn main() {
    albac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let options = match LexOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: alba lex <files...> [options]");
                    eprintln!("Run 'alba help' for options");
                    std::process::exit(1);
                }
            };
            lex_files(&options);
        }
        "styles" => list_styles(),
        "languages" => list_languages(),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("alba {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path means `lex <path>`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("al") || ext.eq_ignore_ascii_case("ali"))
            {
                let options = LexOptions {
                    files: vec![command.clone()],
                    ..LexOptions::default()
                };
                lex_files(&options);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Alba lexer");
    println!();
    println!("Usage: alba <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <files...>       Tokenize files and display tokens");
    println!("  styles               Show the style table and token classes");
    println!("  languages            List registered languages");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --language=<name>   Use this lexer instead of detecting by filename");
    println!("  --kinds-only        Print token kinds only");
    println!("  --styled            Print highlighter class and style per token");
    println!("  --skip-whitespace   Leave whitespace tokens out");
    println!("  --no-parallel       Lex files sequentially");
    println!();
    println!("A path of '-' reads standard input (requires --language).");
    println!("Set RUST_LOG (e.g. RUST_LOG=alba_lexer=debug) for trace output.");
    println!();
    println!("Examples:");
    println!("  alba lex list.al");
    println!("  alba lex src/*.al --kinds-only");
    println!("  alba lex - --language=alba < list.al");
    println!("  alba styles");
}
