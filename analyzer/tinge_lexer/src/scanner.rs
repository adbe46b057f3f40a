//! Hand-written byte-dispatch scanner producing classified tokens.
//!
//! The scanner walks a [`Cursor`] and emits one [`Token`] per call to
//! [`next_token()`](Scanner::next_token). The main dispatch matches on the
//! current byte; each arm calls a focused method that consumes the token's
//! characters and returns the finished `Token`. The synthesized `0x00`
//! sentinel dispatches to the fallback arm, which the EOF check ahead of
//! the dispatch has already ruled out.
//!
//! Scanning is total: no input -- empty, binary, pathological -- produces
//! an error. Anything no rule claims becomes a one-character `Unknown`
//! token and scanning continues.

use crate::cursor::Cursor;
use crate::keywords;
use crate::span::Span;
use crate::stats::LexStatistics;
use crate::token::{Token, TokenKind};

/// Tokenize a source string.
///
/// Returns every token in source order plus the statistics for the pass.
/// Horizontal whitespace between tokens is skipped, never emitted; line
/// breaks appear as one-character `Newline` tokens.
pub fn tokenize(source: &str) -> (Vec<Token<'_>>, LexStatistics) {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = scanner.next_token() {
        tokens.push(token);
    }
    let stats = LexStatistics::from_tokens(&tokens, scanner.line());
    (tokens, stats)
}

/// Snapshot of the cursor state at a token's first character.
#[derive(Clone, Copy)]
struct Start {
    pos: u32,
    line: u32,
    column: u32,
}

/// Streaming scanner over a single source string.
///
/// Also usable as an `Iterator<Item = Token>` for callers that do not need
/// the statistics.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
        }
    }

    /// Final value of the line counter; equals emitted newline tokens + 1.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Produce the next token, or `None` once the source is exhausted.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        self.cursor.skip_horizontal_whitespace();
        if self.cursor.is_eof() {
            return None;
        }

        let start = self.start();
        Some(match self.cursor.current() {
            b'\n' => self.newline(start),
            b'#' => self.comment(start),
            b'"' | b'\'' => self.string(start),
            b'0'..=b'9' => self.number(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            // One-character members of the operator set. `!` is absent:
            // it only occurs inside the two-character `!=`, and membership
            // is tested per character, so a lone `!` falls through to
            // `Unknown` and `!=` lexes as two tokens.
            b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'<' | b'>' | b'&' | b'|' | b'^' | b'~' => {
                self.operator(start)
            }
            b'(' | b')' | b'[' | b']' | b'{' | b'}' | b',' | b':' | b';' | b'.' | b'@' => {
                self.delimiter(start)
            }
            _ => self.unknown_or_unicode_identifier(start),
        })
    }

    fn start(&self) -> Start {
        Start {
            pos: self.cursor.pos(),
            line: self.cursor.line(),
            column: self.cursor.column(),
        }
    }

    /// Finish a token: slice the consumed text and attach the start position.
    fn token(&self, kind: TokenKind, start: Start) -> Token<'src> {
        Token::new(
            kind,
            self.cursor.slice_from(start.pos),
            Span::new(start.pos, self.cursor.pos()),
            start.line,
            start.column,
        )
    }

    // ─── Newlines ────────────────────────────────────────────────────────

    fn newline(&mut self, start: Start) -> Token<'src> {
        self.cursor.newline();
        self.token(TokenKind::Newline, start)
    }

    // ─── Comments ────────────────────────────────────────────────────────

    /// `#` through end of line (exclusive) or end of input.
    fn comment(&mut self, start: Start) -> Token<'src> {
        self.cursor.advance(); // consume '#'
        self.cursor.eat_until_newline_or_eof();
        self.token(TokenKind::Comment, start)
    }

    // ─── Strings ─────────────────────────────────────────────────────────

    /// Quote-delimited literal. A backslash consumes the following character
    /// blind, so escaped quotes stay inside the literal. If the input ends
    /// first, the token simply ends at EOF -- the validator's closure check
    /// reports it, not the lexer.
    fn string(&mut self, start: Start) -> Token<'src> {
        let quote = self.cursor.current();
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => break,
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                b if b == quote => {
                    self.cursor.advance(); // closing quote is part of the token
                    break;
                }
                // Anything else, newlines included -- a line break inside a
                // string does not advance the line counter.
                _ => self.cursor.advance_char(),
            }
        }
        self.token(TokenKind::String, start)
    }

    // ─── Numbers ─────────────────────────────────────────────────────────

    /// Maximal run of digits and dots. No exponent, sign, or underscore
    /// support; `1.2.3` is accepted as one token.
    fn number(&mut self, start: Start) -> Token<'src> {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'.');
        self.token(TokenKind::Number, start)
    }

    // ─── Identifiers ─────────────────────────────────────────────────────

    /// Maximal alphanumeric/underscore run, then keyword classification.
    ///
    /// The first character is validated by the caller (ASCII dispatch arm,
    /// or the unicode fallback which advances past it before delegating);
    /// the continue loop picks up from wherever the cursor stands.
    fn identifier(&mut self, start: Start) -> Token<'src> {
        self.eat_ident_continue();
        let kind = if keywords::is_keyword(self.cursor.slice_from(start.pos)) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.token(kind, start)
    }

    fn eat_ident_continue(&mut self) {
        loop {
            self.cursor.eat_while(is_ident_continue);
            // Identifiers accept any alphanumeric character, not only ASCII.
            match self.cursor.current_char() {
                Some(c) if !c.is_ascii() && c.is_alphanumeric() => self.cursor.advance_char(),
                _ => break,
            }
        }
    }

    // ─── Operators ───────────────────────────────────────────────────────

    /// One- or two-character operator, longest match first.
    fn operator(&mut self, start: Start) -> Token<'src> {
        let first = self.cursor.current();
        self.cursor.advance();
        if is_two_char_operator(first, self.cursor.current()) {
            self.cursor.advance();
        }
        self.token(TokenKind::Operator, start)
    }

    // ─── Delimiters ──────────────────────────────────────────────────────

    fn delimiter(&mut self, start: Start) -> Token<'src> {
        self.cursor.advance();
        self.token(TokenKind::Delimiter, start)
    }

    // ─── Fallback ────────────────────────────────────────────────────────

    /// Non-ASCII alphabetic characters start identifiers; every other
    /// unclaimed character -- interior NUL bytes included -- becomes a
    /// one-character `Unknown` token.
    fn unknown_or_unicode_identifier(&mut self, start: Start) -> Token<'src> {
        match self.cursor.current_char() {
            Some(c) if !c.is_ascii() && c.is_alphabetic() => {
                self.cursor.advance_char();
                self.identifier(start)
            }
            _ => {
                self.cursor.advance_char();
                self.token(TokenKind::Unknown, start)
            }
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.next_token()
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Two-character operator table: `// ** == != <= >= += -= *= /= << >>`.
///
/// The `!=` pair is listed because the operator set is a closed list, but
/// the dispatch never enters the operator arm on `!`, so it cannot match:
/// `!=` lexes as `Unknown("!")` followed by `Operator("=")`.
#[inline]
fn is_two_char_operator(first: u8, second: u8) -> bool {
    matches!(
        (first, second),
        (b'/', b'/')
            | (b'*', b'*')
            | (b'=', b'=')
            | (b'!', b'=')
            | (b'<', b'=')
            | (b'>', b'=')
            | (b'+', b'=')
            | (b'-', b'=')
            | (b'<', b'<')
            | (b'>', b'>')
            | (b'*', b'=')
            | (b'/', b'=')
    )
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: scan a source string and collect all tokens.
    fn scan(source: &str) -> Vec<Token<'_>> {
        tokenize(source).0
    }

    /// Helper: collect `(kind, text)` pairs.
    fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
        scan(source).iter().map(|t| (t.kind, t.text)).collect()
    }

    // === Classification ===

    #[test]
    fn keywords_identifiers_operators_numbers_delimiters() {
        assert_eq!(
            kinds("if x == 1: pass"),
            vec![
                (TokenKind::Keyword, "if"),
                (TokenKind::Identifier, "x"),
                (TokenKind::Operator, "=="),
                (TokenKind::Number, "1"),
                (TokenKind::Delimiter, ":"),
                (TokenKind::Keyword, "pass"),
            ]
        );
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        assert_eq!(
            kinds("x # trailing words\ny"),
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Comment, "# trailing words"),
                (TokenKind::Newline, "\n"),
                (TokenKind::Identifier, "y"),
            ]
        );
    }

    #[test]
    fn comment_at_end_of_input() {
        assert_eq!(kinds("# no newline"), vec![(TokenKind::Comment, "# no newline")]);
    }

    #[test]
    fn string_includes_both_quotes() {
        assert_eq!(kinds("\"hi\""), vec![(TokenKind::String, "\"hi\"")]);
        assert_eq!(kinds("'hi'"), vec![(TokenKind::String, "'hi'")]);
    }

    #[test]
    fn escaped_quote_stays_inside_string() {
        assert_eq!(
            kinds(r#""say \"hi\"""#),
            vec![(TokenKind::String, r#""say \"hi\"""#)]
        );
    }

    #[test]
    fn other_quote_kind_nests_freely() {
        assert_eq!(
            kinds(r#"'a "b" c'"#),
            vec![(TokenKind::String, r#"'a "b" c'"#)]
        );
    }

    #[test]
    fn unterminated_string_ends_at_eof() {
        assert_eq!(kinds("\"oops"), vec![(TokenKind::String, "\"oops")]);
    }

    #[test]
    fn trailing_backslash_in_string() {
        // Backslash as the last input character is consumed on its own.
        assert_eq!(kinds("\"ab\\"), vec![(TokenKind::String, "\"ab\\")]);
    }

    #[test]
    fn newline_inside_string_does_not_bump_line() {
        let (tokens, stats) = tokenize("\"a\nb\"");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(stats.total_lines, 1);
    }

    #[test]
    fn malformed_number_is_one_token() {
        assert_eq!(kinds("1.2.3"), vec![(TokenKind::Number, "1.2.3")]);
    }

    #[test]
    fn leading_dot_is_a_delimiter() {
        assert_eq!(
            kinds(".5"),
            vec![(TokenKind::Delimiter, "."), (TokenKind::Number, "5")]
        );
    }

    #[test]
    fn two_char_operators_are_single_tokens() {
        for op in ["**", "//", "<<", ">>", "<=", ">=", "+=", "-=", "*=", "/=", "=="] {
            assert_eq!(kinds(op), vec![(TokenKind::Operator, op)], "operator {op}");
        }
    }

    #[test]
    fn single_char_operators() {
        for op in ["+", "-", "*", "/", "%", "=", "<", ">", "&", "|", "^", "~"] {
            assert_eq!(kinds(op), vec![(TokenKind::Operator, op)], "operator {op}");
        }
    }

    #[test]
    fn bang_is_not_an_operator_start() {
        // `!` is not a one-character member of the operator set, so `!=`
        // comes out as two tokens.
        assert_eq!(
            kinds("a != b"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Unknown, "!"),
                (TokenKind::Operator, "="),
                (TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn delimiters_one_character_each() {
        assert_eq!(
            kinds("(){}[],:;.@"),
            vec![
                (TokenKind::Delimiter, "("),
                (TokenKind::Delimiter, ")"),
                (TokenKind::Delimiter, "{"),
                (TokenKind::Delimiter, "}"),
                (TokenKind::Delimiter, "["),
                (TokenKind::Delimiter, "]"),
                (TokenKind::Delimiter, ","),
                (TokenKind::Delimiter, ":"),
                (TokenKind::Delimiter, ";"),
                (TokenKind::Delimiter, "."),
                (TokenKind::Delimiter, "@"),
            ]
        );
    }

    #[test]
    fn unrecognized_characters_become_unknown() {
        assert_eq!(kinds("$"), vec![(TokenKind::Unknown, "$")]);
        assert_eq!(kinds("?"), vec![(TokenKind::Unknown, "?")]);
    }

    #[test]
    fn interior_null_is_unknown_not_eof() {
        assert_eq!(
            kinds("a\0b"),
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Unknown, "\0"),
                (TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn unicode_identifier() {
        assert_eq!(kinds("caf\u{00E9}"), vec![(TokenKind::Identifier, "caf\u{00E9}")]);
        assert_eq!(kinds("\u{00FC}ber"), vec![(TokenKind::Identifier, "\u{00FC}ber")]);
    }

    #[test]
    fn non_alphabetic_unicode_is_unknown() {
        assert_eq!(kinds("\u{2603}"), vec![(TokenKind::Unknown, "\u{2603}")]); // snowman
    }

    #[test]
    fn underscore_starts_identifier() {
        assert_eq!(kinds("_private"), vec![(TokenKind::Identifier, "_private")]);
    }

    // === Positions ===

    #[test]
    fn positions_locate_first_character() {
        let tokens = scan("if x\n  y");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1)); // if
        assert_eq!((tokens[1].line, tokens[1].column), (1, 4)); // x
        assert_eq!((tokens[2].line, tokens[2].column), (1, 5)); // \n
        assert_eq!((tokens[3].line, tokens[3].column), (2, 3)); // y
        assert_eq!(tokens[3].span, Span::new(7, 8));
    }

    #[test]
    fn tab_counts_four_columns() {
        let tokens = scan("\tx");
        assert_eq!(tokens[0].column, 5);
    }

    #[test]
    fn spans_cover_exact_bytes() {
        let source = "abc == 1";
        for token in scan(source) {
            assert_eq!(
                &source[token.span.start as usize..token.span.end as usize],
                token.text
            );
        }
    }

    // === Statistics ===

    #[test]
    fn empty_input_yields_no_tokens_one_line() {
        let (tokens, stats) = tokenize("");
        assert!(tokens.is_empty());
        assert_eq!(stats.total_tokens, 0);
        assert_eq!(stats.total_lines, 1);
    }

    #[test]
    fn statistics_count_each_kind() {
        let (_, stats) = tokenize("def f(x):\n    return x + 1  # done\n");
        assert_eq!(stats.count(TokenKind::Keyword), 2); // def, return
        assert_eq!(stats.count(TokenKind::Identifier), 3); // f, x, x
        assert_eq!(stats.count(TokenKind::Delimiter), 3); // ( ) :
        assert_eq!(stats.count(TokenKind::Operator), 1); // +
        assert_eq!(stats.count(TokenKind::Number), 1);
        assert_eq!(stats.count(TokenKind::Comment), 1);
        assert_eq!(stats.count(TokenKind::Newline), 2);
        assert_eq!(stats.total_lines, 3);
        assert_eq!(stats.error_count, 0);
        assert_eq!(stats.warning_count, 0);
    }

    #[test]
    fn whitespace_is_never_emitted() {
        let (tokens, stats) = tokenize("  \t  a  \t  b  ");
        assert_eq!(tokens.len(), 2);
        assert_eq!(stats.count(TokenKind::Whitespace), 0);
    }

    // === Algebraic properties ===

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Every byte of the input lands in exactly one token span, except
        /// bytes skipped as horizontal whitespace.
        fn assert_total_coverage(source: &str) {
            let (tokens, _) = tokenize(source);
            let mut covered = vec![false; source.len()];
            let mut prev_end = 0u32;
            for token in &tokens {
                assert!(token.span.start >= prev_end, "overlapping or unordered spans");
                prev_end = token.span.end;
                for flag in &mut covered[token.span.start as usize..token.span.end as usize] {
                    *flag = true;
                }
            }
            for (i, flag) in covered.iter().enumerate() {
                if !flag {
                    let b = source.as_bytes()[i];
                    assert!(
                        matches!(b, b' ' | b'\t' | b'\r'),
                        "uncovered non-whitespace byte {b:#04x} at offset {i}"
                    );
                }
            }
        }

        proptest! {
            #[test]
            fn coverage_arbitrary_strings(source in ".*") {
                assert_total_coverage(&source);
            }

            #[test]
            fn coverage_source_shaped(source in "[a-z0-9_ \t\r\n#'\"\\\\(){}\\[\\]+=<>!.:,@$-]{0,120}") {
                assert_total_coverage(&source);
            }

            #[test]
            fn counts_are_consistent(source in ".*") {
                let (tokens, stats) = tokenize(&source);
                prop_assert_eq!(stats.total_tokens as usize, tokens.len());
                let sum: u32 = stats.counts_by_kind.values().sum();
                prop_assert_eq!(sum, stats.total_tokens);
                let newlines = tokens.iter().filter(|t| t.kind == TokenKind::Newline).count();
                prop_assert_eq!(stats.total_lines as usize, newlines + 1);
            }

            #[test]
            fn tokenize_is_idempotent(source in ".*") {
                let (first, _) = tokenize(&source);
                let (second, _) = tokenize(&source);
                prop_assert_eq!(first, second);
            }
        }
    }
}
