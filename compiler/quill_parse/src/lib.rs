//! Recursive descent parser for Quill.
//!
//! Turns the lexer's token stream into a list of [`Stmt`]s. Parsing is
//! all-or-nothing: the first syntax error aborts with a [`ParseError`] and
//! no statements are returned.
//!
//! Expression precedence, lowest to highest:
//!
//! ```text
//! or -> and -> equality -> comparison -> addition -> multiplication
//!    -> unary -> call -> primary
//! ```
//!
//! Calls to `input`, `append`, `remove`, `put`, and `dict_remove` are
//! rewritten into their dedicated nodes at the call site, with the arity
//! checked here rather than at run time.

mod cursor;
mod error;
mod grammar;

use quill_ir::{Stmt, StringInterner, Token, TokenKind};

pub use cursor::Cursor;
pub use error::ParseError;

pub type ParseResult<T> = Result<T, ParseError>;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
}

impl<'a> Parser<'a> {
    /// `interner` must be the one the tokens were lexed with; it resolves
    /// callee names when recognizing built-ins.
    pub fn new(tokens: &'a [Token], interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            interner,
        }
    }

    /// Parse statements until EOF.
    pub fn parse_program(mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        tracing::debug!(statements = statements.len(), "parsed program");
        Ok(statements)
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }
}

/// Parse a whole token stream.
pub fn parse(tokens: &[Token], interner: &StringInterner) -> ParseResult<Vec<Stmt>> {
    Parser::new(tokens, interner).parse_program()
}
