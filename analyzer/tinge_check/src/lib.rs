//! Structural validator over the tinge token stream.
//!
//! Consumes the lexer's token sequence and reports structural defects:
//! bracket balance and string closure. No grammar-level parsing happens
//! here -- there is no AST and no statement structure, only two single-pass,
//! O(n) checks over the tokens.
//!
//! The result is an ordered list of [`Diagnostic`]s, empty when the input
//! is structurally clean. Validation never fails: diagnostics are the
//! return value, not an error path.
//!
//! ```
//! use tinge_check::validate;
//! use tinge_lexer::tokenize;
//!
//! let (tokens, _) = tokenize("(a + [b * {c}])");
//! assert!(validate(&tokens).is_empty());
//!
//! let (tokens, _) = tokenize("(]");
//! assert_eq!(validate(&tokens).len(), 1);
//! ```

mod brackets;
mod diagnostic;
mod strings;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};

use tinge_lexer::{Token, TokenKind};

/// Validate a token sequence.
///
/// Whitespace and newline tokens are irrelevant to structure and are
/// filtered out first. The two checks run in fixed order -- bracket balance,
/// then string closure -- and their diagnostics are concatenated in
/// detection order.
pub fn validate(tokens: &[Token<'_>]) -> Vec<Diagnostic> {
    let relevant: Vec<&Token<'_>> = tokens
        .iter()
        .filter(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::Newline))
        .collect();

    let mut diagnostics = Vec::new();
    brackets::check_brackets(&relevant, &mut diagnostics);
    strings::check_strings(&relevant, &mut diagnostics);
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tinge_lexer::tokenize;

    fn run(source: &str) -> Vec<Diagnostic> {
        let (tokens, _) = tokenize(source);
        validate(&tokens)
    }

    #[test]
    fn balanced_input_is_clean() {
        assert!(run("(a + [b * {c}]) ").is_empty());
    }

    #[test]
    fn unmatched_closing_paren() {
        let diags = run(")");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].to_string(),
            "Unmatched closing ')' at line 1, column 1"
        );
    }

    #[test]
    fn two_unclosed_parens_in_stack_order() {
        let diags = run("((");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].to_string(), "Unclosed '(' at line 1, column 1");
        assert_eq!(diags[1].to_string(), "Unclosed '(' at line 1, column 2");
    }

    #[test]
    fn mismatched_pair_consumes_the_closer() {
        let diags = run("(]");
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].to_string(),
            "Mismatched parentheses: expected ')' but found ']' at line 1, column 2"
        );
    }

    #[test]
    fn unterminated_string_heuristic() {
        let diags = run("'say \"hi");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::UnterminatedString);
    }

    #[test]
    fn bracket_diagnostics_precede_string_diagnostics() {
        let diags = run("( \"oops");
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].kind, DiagnosticKind::UnclosedOpening('('));
        assert_eq!(diags[1].kind, DiagnosticKind::UnterminatedString);
    }

    #[test]
    fn newlines_do_not_disturb_structure() {
        assert!(run("(\n  a\n)").is_empty());
    }

    #[test]
    fn empty_input_is_clean() {
        assert!(run("").is_empty());
    }

    #[test]
    fn multiline_positions_are_reported() {
        let diags = run("a\nb\n  ]");
        assert_eq!(
            diags[0].to_string(),
            "Unmatched closing ']' at line 3, column 3"
        );
    }
}
