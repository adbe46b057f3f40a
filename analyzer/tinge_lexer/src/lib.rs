//! Streaming lexical analyzer for Python-flavored source.
//!
//! Converts raw source text into an ordered sequence of classified
//! [`Token`]s plus aggregate [`LexStatistics`]. Tokenization is a total
//! function: it cannot fail for any input -- unrecognized characters become
//! [`TokenKind::Unknown`] tokens and scanning continues. Both entry points
//! are pure and safe to call concurrently with independent inputs.
//!
//! ```
//! use tinge_lexer::{tokenize, TokenKind};
//!
//! let (tokens, stats) = tokenize("if x == 1: pass");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(stats.total_tokens, 6);
//! ```

mod cursor;
mod keywords;
mod scanner;
mod span;
mod stats;
mod token;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use span::Span;
pub use stats::LexStatistics;
pub use token::{Token, TokenKind};
