//! Reserved words.

use quill_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns `None` for ordinary identifiers. The built-in operations other
/// than `input` (`append`, `remove`, `put`, `dict_remove`) are identifiers
/// here; the parser recognizes them at the call site.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    // Keywords are 2-10 lowercase ASCII letters.
    if !(2..=10).contains(&text.len()) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    let kind = match text {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "and" => TokenKind::And,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "printupper" => TokenKind::PrintUpper,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "input" => TokenKind::Input,
        "fun" => TokenKind::Fun,
        "return" => TokenKind::Return,
        "dict" => TokenKind::Dict,
        _ => return None,
    };
    Some(kind)
}
