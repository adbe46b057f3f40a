//! Token types for the tinge lexer.
//!
//! The kind set is closed: ten variants, fixed for the life of the process.
//! `Whitespace` is part of the vocabulary for consumers that want to reason
//! about it, but the scanner never emits it -- horizontal whitespace is
//! skipped, and only `Newline` tokens mark line structure.

use std::fmt;

use crate::Span;

/// Number of [`TokenKind`] variants. Used for table sizing and test verification.
pub(crate) const TOKEN_KIND_COUNT: usize = 10;

/// Classification of a source token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Reserved word: `def`, `if`, `else`, ...
    Keyword,
    /// String literal including both quote characters: `"hi"`, `'x'`
    String,
    /// Numeric literal: `42`, `3.14` (also malformed runs like `1.2.3`)
    Number,
    /// Line comment spanning `#` through end of line
    Comment,
    /// Operator, one or two characters: `+`, `==`, `//`, `**`
    Operator,
    /// Single-character delimiter: `(`, `)`, `:`, `.`, `@`
    Delimiter,
    /// Name that is not a reserved word
    Identifier,
    /// Any character no other rule claims
    Unknown,
    /// Reserved for consumers; never emitted by the scanner
    Whitespace,
    /// A single `\n`
    Newline,
}

impl TokenKind {
    /// All variants, in declaration order. Lets the statistics table and
    /// presentation layers iterate the closed set without hand-maintaining
    /// a parallel list.
    pub const ALL: [TokenKind; TOKEN_KIND_COUNT] = [
        TokenKind::Keyword,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Comment,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::Identifier,
        TokenKind::Unknown,
        TokenKind::Whitespace,
        TokenKind::Newline,
    ];

    /// Stable lowercase name for display and logging.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "operator",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Identifier => "identifier",
            TokenKind::Unknown => "unknown",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, contiguous span of source text.
///
/// Tokens borrow their text from the source they were scanned from and are
/// never mutated after emission. `line` and `column` are 1-based and locate
/// the token's first character; `span` holds byte offsets (start inclusive,
/// end exclusive).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Exact source substring, delimiters included for strings and comments.
    pub text: &'src str,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, span: Span, line: u32, column: u32) -> Self {
        Token {
            kind,
            text,
            span,
            line,
            column,
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {} ({}:{})",
            self.kind, self.text, self.span, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_lists_every_variant_once() {
        assert_eq!(TokenKind::ALL.len(), TOKEN_KIND_COUNT);
        for (i, a) in TokenKind::ALL.iter().enumerate() {
            for b in &TokenKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn names_are_distinct_lowercase() {
        for kind in TokenKind::ALL {
            let name = kind.name();
            assert_eq!(name, name.to_lowercase());
        }
        assert_eq!(TokenKind::String.to_string(), "string");
    }

    #[test]
    fn debug_shows_kind_text_and_position() {
        let tok = Token::new(TokenKind::Keyword, "if", Span::new(0, 2), 1, 1);
        assert_eq!(format!("{tok:?}"), "Keyword \"if\" @ 0..2 (1:1)");
    }
}
