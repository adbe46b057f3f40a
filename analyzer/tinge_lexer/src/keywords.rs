//! Keyword resolution.
//!
//! The reserved-word set is the fixed Python list -- 33 words, never
//! configurable at runtime. The lookup uses the identifier's length as a
//! first-pass filter (keywords range from 2-8 chars), then matches against
//! the specific keywords of that length, so non-keyword identifiers are
//! rejected with at most a handful of comparisons.

/// Number of reserved words. Kept in sync with the buckets below by test.
#[cfg(test)]
pub(crate) const KEYWORD_COUNT: usize = 33;

/// Returns `true` if `text` is a reserved word.
///
/// Length-bucketed: identifiers whose length falls outside the 2-8 range
/// are immediately rejected without any comparison.
#[inline]
pub(crate) fn is_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "if" | "or" | "in" | "is" | "as"),
        3 => matches!(text, "def" | "for" | "try" | "and" | "not" | "del"),
        4 => matches!(text, "elif" | "else" | "with" | "from" | "pass" | "True" | "None"),
        5 => matches!(text, "class" | "while" | "break" | "yield" | "raise" | "False"),
        6 => matches!(
            text,
            "import" | "return" | "lambda" | "global" | "assert" | "except"
        ),
        7 => matches!(text, "finally"),
        8 => matches!(text, "continue" | "nonlocal"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYWORDS: [&str; KEYWORD_COUNT] = [
        "def", "class", "if", "elif", "else", "for", "while", "try", "except", "finally", "with",
        "as", "import", "from", "return", "yield", "break", "continue", "pass", "lambda", "and",
        "or", "not", "in", "is", "True", "False", "None", "global", "nonlocal", "assert", "del",
        "raise",
    ];

    #[test]
    fn every_reserved_word_is_recognized() {
        for kw in ALL_KEYWORDS {
            assert!(is_keyword(kw), "missing keyword: {kw}");
        }
    }

    #[test]
    fn case_matters() {
        assert!(is_keyword("True"));
        assert!(!is_keyword("true"));
        assert!(!is_keyword("IF"));
    }

    #[test]
    fn near_misses_are_identifiers() {
        for ident in ["iff", "classs", "clas", "defn", "ret", "imports", "Nonee"] {
            assert!(!is_keyword(ident), "false positive: {ident}");
        }
    }

    #[test]
    fn length_buckets_reject_out_of_range() {
        assert!(!is_keyword(""));
        assert!(!is_keyword("x"));
        assert!(!is_keyword("verylongidentifier"));
    }
}
