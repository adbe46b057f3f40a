//! Scanning cursor over source bytes with line/column tracking.
//!
//! The cursor owns the three co-evolving counters -- byte offset, 1-based
//! line, 1-based column -- and every mutating method updates them together,
//! so the counters cannot drift apart. EOF is detected by reading a
//! synthesized `0x00` sentinel byte: `current()` returns `0` once the
//! offset reaches the source length, which lets the scanner's byte dispatch
//! terminate without explicit bounds checks at every arm.
//!
//! # Interior Null Bytes
//!
//! A real `0x00` in the source also reads as `0`; `is_eof()` distinguishes
//! it by comparing the offset against the source length. Interior nulls are
//! ordinary unrecognized characters to the scanner, not EOF.
//!
//! # Invariant
//!
//! The offset always rests on a UTF-8 character boundary. Single-byte
//! `advance()` is only used on ASCII bytes; everything else moves through
//! [`advance_char()`](Cursor::advance_char).

use memchr::memchr;

/// Scanning cursor: source view plus `(offset, line, column)` state.
///
/// Columns count characters, not bytes, and are 1-based. A tab consumed by
/// [`skip_horizontal_whitespace()`](Cursor::skip_horizontal_whitespace)
/// advances the column by 4; every other character advances it by 1.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    bytes: &'src [u8],
    /// Current read position (byte index).
    pos: u32,
    /// 1-based line of the current position. Only [`newline()`](Cursor::newline)
    /// increments it -- newlines consumed inside string literals do not.
    line: u32,
    /// 1-based column of the current position.
    column: u32,
    /// Source length in bytes. Saturates at `u32::MAX` for absurdly large
    /// inputs (> 4 GiB), which truncates scanning rather than failing.
    source_len: u32,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at offset 0, line 1, column 1.
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
            source_len: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    ///
    /// Interior null bytes also return `0`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        if self.pos < self.source_len {
            self.bytes[self.pos as usize]
        } else {
            0
        }
    }

    /// Returns the byte one position ahead, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        let next = self.pos.saturating_add(1);
        if next < self.source_len {
            self.bytes[next as usize]
        } else {
            0
        }
    }

    /// Returns `true` once the cursor has consumed the whole source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// 1-based line of the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the current position.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Extract a source substring.
    ///
    /// # Contract
    ///
    /// `start..end` must fall on character boundaries, which holds for any
    /// offsets produced by this cursor (see module invariant).
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'src str {
        &self.source[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'src str {
        self.slice(start, self.pos)
    }

    /// Decode the full character at the current position.
    ///
    /// Returns `None` at EOF.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            None
        } else {
            self.source[self.pos as usize..].chars().next()
        }
    }

    /// Advance one byte. Column +1.
    ///
    /// Only valid on ASCII bytes -- multi-byte characters go through
    /// [`advance_char()`](Self::advance_char).
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
        self.column += 1;
    }

    /// Advance past one full UTF-8 character. Column +1 regardless of width.
    #[inline]
    pub fn advance_char(&mut self) {
        self.pos += utf8_char_width(self.current());
        self.column += 1;
    }

    /// Consume a `\n`: offset +1, line +1, column reset to 1.
    #[inline]
    pub fn newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.column = 1;
    }

    /// Advance while `pred` accepts the current byte. Column +1 per byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` (true for every byte-class predicate
    /// the scanner uses), so the synthesized sentinel terminates the loop
    /// at EOF. Only valid for ASCII-only predicates.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
            self.column += 1;
        }
    }

    /// Skip horizontal whitespace: space, tab, carriage return. Never
    /// consumes `\n`. Tab advances the column by 4, the others by 1.
    pub fn skip_horizontal_whitespace(&mut self) {
        loop {
            match self.current() {
                b'\t' => {
                    self.pos += 1;
                    self.column += 4;
                }
                b' ' | b'\r' => {
                    self.pos += 1;
                    self.column += 1;
                }
                _ => break,
            }
        }
    }

    /// Advance to the next `\n` byte or EOF using SIMD-accelerated search.
    ///
    /// Used for comment bodies, which cannot contain a newline. The column
    /// advances by the number of *characters* skipped, keeping it honest for
    /// multi-byte text inside comments.
    pub fn eat_until_newline_or_eof(&mut self) {
        let start = self.pos as usize;
        let rest = &self.bytes[start..self.source_len as usize];
        let end = match memchr(b'\n', rest) {
            Some(offset) => start + offset,
            None => self.source_len as usize,
        };
        let chars = self.source[start..end].chars().count();
        self.pos = u32::try_from(end).unwrap_or(u32::MAX);
        self.column = self
            .column
            .saturating_add(u32::try_from(chars).unwrap_or(u32::MAX));
    }
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Uses the leading byte to determine character width:
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // === Basic Navigation ===

    #[test]
    fn current_returns_first_byte() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.current(), b'a');
    }

    #[test]
    fn advance_moves_forward() {
        let mut cursor = Cursor::new("abc");
        cursor.advance();
        assert_eq!(cursor.current(), b'b');
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn advance_through_entire_source() {
        let mut cursor = Cursor::new("hi");
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn peek_returns_next_byte() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek(), b'b');
    }

    #[test]
    fn peek_near_end_returns_sentinel() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        assert_eq!(cursor.peek(), 0);
    }

    // === EOF and interior nulls ===

    #[test]
    fn is_eof_on_empty_source() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.current_char(), None);
    }

    #[test]
    fn interior_null_is_not_eof() {
        let mut cursor = Cursor::new("a\0b");
        cursor.advance();
        assert_eq!(cursor.current(), 0);
        assert!(!cursor.is_eof());
        cursor.advance();
        assert_eq!(cursor.current(), b'b');
    }

    // === Line/column tracking ===

    #[test]
    fn newline_resets_column() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.newline();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        assert_eq!(cursor.current(), b'b');
    }

    #[test]
    fn tab_advances_column_by_four() {
        let mut cursor = Cursor::new("\t x");
        cursor.skip_horizontal_whitespace();
        assert_eq!(cursor.column(), 6); // 1 + 4 (tab) + 1 (space)
        assert_eq!(cursor.current(), b'x');
    }

    #[test]
    fn skip_whitespace_stops_at_newline() {
        let mut cursor = Cursor::new("  \r \nx");
        cursor.skip_horizontal_whitespace();
        assert_eq!(cursor.current(), b'\n');
        assert_eq!(cursor.pos(), 4);
    }

    #[test]
    fn advance_char_counts_one_column_for_multibyte() {
        let mut cursor = Cursor::new("\u{1F600}x"); // 4-byte emoji
        cursor.advance_char();
        assert_eq!(cursor.pos(), 4);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.current(), b'x');
    }

    // === Slicing ===

    #[test]
    fn slice_extracts_substring() {
        let cursor = Cursor::new("hello world");
        assert_eq!(cursor.slice(0, 5), "hello");
        assert_eq!(cursor.slice(6, 11), "world");
    }

    #[test]
    fn slice_from_extracts_to_current() {
        let mut cursor = Cursor::new("abcdef");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.slice_from(0), "abc");
        assert_eq!(cursor.slice_from(1), "bc");
    }

    // === eat_while ===

    #[test]
    fn eat_while_consumes_matching_bytes() {
        let mut cursor = Cursor::new("aaabbb");
        cursor.eat_while(|b| b == b'a');
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.current(), b'b');
    }

    #[test]
    fn eat_while_stops_at_sentinel() {
        let mut cursor = Cursor::new("aaa");
        cursor.eat_while(|b| b == b'a');
        assert_eq!(cursor.pos(), 3);
        assert!(cursor.is_eof());
    }

    #[test]
    fn eat_while_no_match() {
        let mut cursor = Cursor::new("hello");
        cursor.eat_while(|b| b == b'z');
        assert_eq!(cursor.pos(), 0);
    }

    // === eat_until_newline_or_eof ===

    #[test]
    fn comment_skip_finds_lf() {
        let mut cursor = Cursor::new("hello\nworld");
        cursor.eat_until_newline_or_eof();
        assert_eq!(cursor.pos(), 5);
        assert_eq!(cursor.current(), b'\n');
        assert_eq!(cursor.column(), 6);
    }

    #[test]
    fn comment_skip_stops_at_eof() {
        let mut cursor = Cursor::new("no newline here");
        cursor.eat_until_newline_or_eof();
        assert!(cursor.is_eof());
    }

    #[test]
    fn comment_skip_counts_chars_not_bytes() {
        let mut cursor = Cursor::new("\u{00E9}\u{00E9}\n"); // two 2-byte chars
        cursor.eat_until_newline_or_eof();
        assert_eq!(cursor.pos(), 4);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn comment_skip_empty_source() {
        let mut cursor = Cursor::new("");
        cursor.eat_until_newline_or_eof();
        assert!(cursor.is_eof());
        assert_eq!(cursor.pos(), 0);
    }

    // === Copy semantics ===

    #[test]
    fn cursor_is_copy_for_checkpointing() {
        let mut cursor = Cursor::new("abcdef");
        cursor.advance();
        cursor.advance();
        let saved = cursor;
        cursor.advance();
        assert_eq!(cursor.pos(), 3);
        assert_eq!(saved.pos(), 2);
        assert_eq!(saved.current(), b'c');
    }
}
