//! tinge CLI
//!
//! Thin driver over the analyzer core: lex, check, stats.

use tingec::commands::{check_file, lex_file, stats_file};

fn main() {
    tingec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: tinge lex <file>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "check" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: tinge check <file>");
                std::process::exit(1);
            };
            check_file(path);
        }
        "stats" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: tinge stats <file>");
                std::process::exit(1);
            };
            stats_file(path);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("tinge - lexical analyzer and structural checker");
    println!();
    println!("Usage: tinge <command> <file>");
    println!();
    println!("Commands:");
    println!("  lex <file>     Tokenize and display the token stream");
    println!("  check <file>   Report bracket and string-closure problems");
    println!("  stats <file>   Show token counts and per-kind percentages");
    println!();
    println!("Set TINGE_LOG=debug for timing traces on stderr.");
}
