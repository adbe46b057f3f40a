//! Subcommand implementations: `lex`, `check`, and `stats`.

use std::time::Instant;

use tinge_check::validate;
use tinge_lexer::{tokenize, TokenKind};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);

    let started = Instant::now();
    let (tokens, stats) = tokenize(&content);
    tracing::debug!(
        tokens = tokens.len(),
        lines = stats.total_lines,
        elapsed = ?started.elapsed(),
        "lexed '{path}'"
    );

    println!("Tokens for '{}' ({} tokens):", path, stats.total_tokens);
    for token in &tokens {
        println!(
            "  {:<10} {:?} @ {} ({}:{})",
            token.kind, token.text, token.span, token.line, token.column
        );
    }
}

/// Validate a file and display structural diagnostics.
///
/// Exits with status 1 when any diagnostic is reported.
pub fn check_file(path: &str) {
    let content = read_file(path);

    let started = Instant::now();
    let (tokens, _) = tokenize(&content);
    let diagnostics = validate(&tokens);
    tracing::debug!(
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        elapsed = ?started.elapsed(),
        "checked '{path}'"
    );

    if diagnostics.is_empty() {
        println!("{path}: no structural problems");
        return;
    }

    println!("Problems in '{path}':");
    for diagnostic in &diagnostics {
        println!("  {}: {}", diagnostic.severity(), diagnostic);
    }
    std::process::exit(1);
}

/// Display tokenization statistics: totals plus per-kind counts and shares.
pub fn stats_file(path: &str) {
    let content = read_file(path);
    let (_, stats) = tokenize(&content);

    println!("Statistics for '{path}':");
    println!("  Total tokens: {}", stats.total_tokens);
    println!("  Total lines:  {}", stats.total_lines);
    for kind in TokenKind::ALL {
        let count = stats.count(kind);
        if count > 0 {
            println!(
                "  {:<12} {:>6}  {:>5.1}%",
                kind.name(),
                count,
                stats.percentage(kind)
            );
        }
    }
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
