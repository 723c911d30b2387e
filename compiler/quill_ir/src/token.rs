//! Lexer output consumed by the parser.

use crate::{Name, Span};
use std::fmt;

/// Token kinds.
///
/// Literal payloads live in the kind: `Number` carries the parsed value,
/// `Ident` the interned name. The exact source text of every token is kept
/// separately in [`Token::lexeme`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Colon,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    BangEq,
    Eq,
    EqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Literals
    Number(f64),
    Str,
    Ident(Name),

    // Keywords
    True,
    False,
    And,
    Or,
    Print,
    PrintUpper,
    If,
    Else,
    While,
    Input,
    Fun,
    Return,
    Dict,

    Eof,
}

impl TokenKind {
    /// Upper-snake-case name used by the token dump.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LParen => "LEFT_PAREN",
            TokenKind::RParen => "RIGHT_PAREN",
            TokenKind::LBrace => "LEFT_BRACE",
            TokenKind::RBrace => "RIGHT_BRACE",
            TokenKind::LBracket => "LEFT_BRACKET",
            TokenKind::RBracket => "RIGHT_BRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Bang => "BANG",
            TokenKind::BangEq => "BANG_EQUAL",
            TokenKind::Eq => "EQUAL",
            TokenKind::EqEq => "EQUAL_EQUAL",
            TokenKind::Lt => "LESS",
            TokenKind::LtEq => "LESS_EQUAL",
            TokenKind::Gt => "GREATER",
            TokenKind::GtEq => "GREATER_EQUAL",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Str => "STRING",
            TokenKind::Ident(_) => "IDENTIFIER",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::PrintUpper => "PRINTUPPER",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Input => "INPUT",
            TokenKind::Fun => "FUN",
            TokenKind::Return => "RETURN",
            TokenKind::Dict => "DICT",
            TokenKind::Eof => "EOF",
        }
    }

    /// Check whether two kinds are the same variant, ignoring payloads.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A scanned token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token; for strings, the text between the quotes.
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The end-of-input marker that terminates every token stream.
    pub fn eof(at: usize) -> Self {
        Token::new(TokenKind::Eof, "", Span::point(at))
    }

    /// Numeric payload of a `Number` token.
    pub fn number(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.name(), self.lexeme)?;
        if let Some(value) = self.number() {
            write!(f, " ({value:?})")?;
        }
        Ok(())
    }
}
