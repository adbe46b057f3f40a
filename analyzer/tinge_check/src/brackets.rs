//! Bracket balance check.

use tinge_lexer::Token;

use crate::diagnostic::{Diagnostic, DiagnosticKind};

/// An opening bracket awaiting its closer.
#[derive(Copy, Clone, Debug)]
struct OpenBracket {
    opening: char,
    line: u32,
    column: u32,
}

/// Expected closer for an opening bracket.
fn closing_for(opening: char) -> char {
    match opening {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Check bracket balance over structurally relevant tokens.
///
/// Single forward pass with a LIFO stack of open brackets. A closer that
/// arrives with an empty stack is unmatched; a closer that pops an opener
/// of the wrong shape is mismatched -- the opener is popped regardless, a
/// deliberate simplification rather than error recovery. Openers left on
/// the stack afterwards are reported outermost-opened first.
pub(crate) fn check_brackets(tokens: &[&Token<'_>], diagnostics: &mut Vec<Diagnostic>) {
    let mut stack: Vec<OpenBracket> = Vec::new();

    for token in tokens {
        match token.text.as_bytes() {
            [b @ (b'(' | b'[' | b'{')] => {
                stack.push(OpenBracket {
                    opening: char::from(*b),
                    line: token.line,
                    column: token.column,
                });
            }
            [b @ (b')' | b']' | b'}')] => {
                let found = char::from(*b);
                match stack.pop() {
                    None => diagnostics.push(Diagnostic::new(
                        DiagnosticKind::UnmatchedClosing(found),
                        token.line,
                        token.column,
                    )),
                    Some(open) => {
                        let expected = closing_for(open.opening);
                        if found != expected {
                            diagnostics.push(Diagnostic::new(
                                DiagnosticKind::MismatchedPair { expected, found },
                                token.line,
                                token.column,
                            ));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    for open in stack {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::UnclosedOpening(open.opening),
            open.line,
            open.column,
        ));
    }
}
