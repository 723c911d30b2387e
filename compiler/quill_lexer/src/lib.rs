//! Lexer for Quill using logos with string interning.
//!
//! Scanning is best-effort: input that starts no valid token is recorded as
//! a [`LexError`] and skipped, and scanning carries on with the next
//! character. The token stream always ends with an `Eof` token.

mod keywords;
mod lex_error;
mod raw_token;

use logos::Logos;
use quill_ir::{Span, StringInterner, Token, TokenKind};

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Tokens plus everything that had to be skipped to produce them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex `source` into tokens, interning identifiers in `interner`.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput::default();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) => match convert_token(raw, slice, span, interner) {
                Ok(token) => output.tokens.push(token),
                Err(err) => output.errors.push(err),
            },
            Err(()) => {
                let found = slice.chars().next().unwrap_or('\0');
                output.errors.push(LexError::unexpected_char(span, found));
            }
        }
    }

    output.tokens.push(Token::eof(source.len()));

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed source"
    );
    output
}

/// Convert a raw token into a `Token`, or the error it stands for.
fn convert_token(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
) -> Result<Token, LexError> {
    let kind = match raw {
        RawToken::Number => match slice.parse::<f64>() {
            Ok(value) => TokenKind::Number(value),
            Err(_) => return Err(LexError::invalid_number(span, slice)),
        },
        RawToken::Str => {
            let content = &slice[1..slice.len() - 1];
            return Ok(Token::new(TokenKind::Str, content, span));
        }
        RawToken::UnterminatedStr => return Err(LexError::unterminated_string(span)),
        RawToken::Ident => {
            keywords::lookup(slice).unwrap_or_else(|| TokenKind::Ident(interner.intern(slice)))
        }

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEq => TokenKind::BangEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
    };
    Ok(Token::new(kind, slice, span))
}
