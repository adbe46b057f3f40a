//! Structural diagnostics.
//!
//! A [`Diagnostic`] is data, not an exception: the validator always returns
//! a list (possibly empty), and callers check emptiness rather than catching
//! anything. Each diagnostic carries a structured kind plus the 1-based
//! line/column of the offending token, and renders to the fixed message
//! wording via `Display`.

use std::fmt;

/// Severity level for diagnostics.
///
/// Every structural check reports `Error` today; `Warning` exists so the
/// statistics' warning counter has something to grow into.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What went structurally wrong.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    /// A closing bracket with no opening bracket left on the stack.
    UnmatchedClosing(char),
    /// A closing bracket that pops an opener of the wrong shape.
    MismatchedPair { expected: char, found: char },
    /// An opening bracket still on the stack when the tokens ran out.
    UnclosedOpening(char),
    /// A string literal that fails the closure heuristic.
    UnterminatedString,
}

/// One structural defect, located at a token's first character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    pub column: u32,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: u32, column: u32) -> Self {
        Diagnostic { kind, line, column }
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            DiagnosticKind::UnmatchedClosing(_)
            | DiagnosticKind::MismatchedPair { .. }
            | DiagnosticKind::UnclosedOpening(_)
            | DiagnosticKind::UnterminatedString => Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnmatchedClosing(found) => {
                write!(f, "Unmatched closing '{found}'")?;
            }
            DiagnosticKind::MismatchedPair { expected, found } => {
                write!(
                    f,
                    "Mismatched parentheses: expected '{expected}' but found '{found}'"
                )?;
            }
            DiagnosticKind::UnclosedOpening(opening) => {
                write!(f, "Unclosed '{opening}'")?;
            }
            DiagnosticKind::UnterminatedString => {
                write!(f, "Unclosed string")?;
            }
        }
        write!(f, " at line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_wording() {
        assert_eq!(
            Diagnostic::new(DiagnosticKind::UnmatchedClosing(')'), 1, 5).to_string(),
            "Unmatched closing ')' at line 1, column 5"
        );
        assert_eq!(
            Diagnostic::new(
                DiagnosticKind::MismatchedPair {
                    expected: ')',
                    found: ']'
                },
                2,
                3
            )
            .to_string(),
            "Mismatched parentheses: expected ')' but found ']' at line 2, column 3"
        );
        assert_eq!(
            Diagnostic::new(DiagnosticKind::UnclosedOpening('('), 1, 1).to_string(),
            "Unclosed '(' at line 1, column 1"
        );
        assert_eq!(
            Diagnostic::new(DiagnosticKind::UnterminatedString, 3, 7).to_string(),
            "Unclosed string at line 3, column 7"
        );
    }

    #[test]
    fn all_kinds_are_errors() {
        let diag = Diagnostic::new(DiagnosticKind::UnterminatedString, 1, 1);
        assert_eq!(diag.severity(), Severity::Error);
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
