//! Parse error type.
//!
//! Any parse error aborts the whole parse. The message names what was
//! expected and the token actually found; the driver prefixes it with
//! `Parse Error: `.

use quill_ir::{Span, Token, TokenKind};
use std::fmt;

/// A fatal syntax error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// Source text of the offending token (`end of input` at EOF).
    pub lexeme: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, lexeme: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            lexeme: lexeme.into(),
            span,
        }
    }

    /// `<expectation> Found: <token>`.
    #[cold]
    pub fn expected(expectation: &str, found: &Token) -> Self {
        let lexeme = describe(found);
        ParseError::new(format!("{expectation} Found: {lexeme}"), lexeme, found.span)
    }

    /// No expression can start at `found`.
    #[cold]
    pub fn expected_expression(found: &Token) -> Self {
        let lexeme = describe(found);
        ParseError::new(
            format!("Expect expression at token: {lexeme}"),
            lexeme,
            found.span,
        )
    }

    /// A built-in called with the wrong number of arguments.
    #[cold]
    pub fn builtin_arity(name: &str, expected: usize, span: Span) -> Self {
        let noun = if expected == 1 { "argument" } else { "arguments" };
        ParseError::new(
            format!("{name} expects exactly {expected} {noun}."),
            name,
            span,
        )
    }
}

/// How a token is named in a message.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "end of input".to_owned(),
        TokenKind::Str => format!("\"{}\"", token.lexeme),
        _ => token.lexeme.clone(),
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}
