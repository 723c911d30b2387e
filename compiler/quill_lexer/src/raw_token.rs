//! Logos-derived tokenizer output, before keyword resolution and interning.

use logos::Logos;

/// Raw token from logos.
///
/// Identifiers and keywords share one pattern; [`crate::keywords::lookup`]
/// tells them apart afterwards. A string with no closing quote matches
/// `UnterminatedStr`; when the quote is present the longer `Str` match wins.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEq,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,

    // Maximal run of digits and dots; validity is checked on conversion.
    #[regex(r"[0-9.]+")]
    Number,

    // No escape processing.
    #[regex(r#""[^"]*""#)]
    Str,

    #[regex(r#""[^"]*"#)]
    UnterminatedStr,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}
