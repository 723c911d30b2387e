//! Lexer error types.
//!
//! Lexer errors never stop scanning. Each one records what was skipped and
//! where; the driver reports them as `Lexer Error: <message>`.

use quill_ir::Span;
use std::fmt;

/// A skipped piece of input.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedChar(char),
    /// `"` with no closing quote before end of input.
    UnterminatedString,
    /// A run of digits and dots that is not a number, e.g. `1.2.3`.
    InvalidNumber(String),
}

impl LexError {
    #[cold]
    pub fn unexpected_char(span: Span, found: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnexpectedChar(found),
        }
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::UnterminatedString,
        }
    }

    #[cold]
    pub fn invalid_number(span: Span, text: impl Into<String>) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidNumber(text.into()),
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedChar(c) => write!(f, "Unexpected character: {c}"),
            LexErrorKind::UnterminatedString => f.write_str("Unterminated string."),
            LexErrorKind::InvalidNumber(text) => write!(f, "Invalid number format: {text}"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for LexError {}
