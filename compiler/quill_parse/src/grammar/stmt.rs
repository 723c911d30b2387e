//! Statement parsing.

use crate::{ParseError, ParseResult, Parser};
use quill_ir::{Stmt, TokenKind};
use quill_stack::ensure_sufficient_stack;

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Stmt> {
        let kind = self.current_kind();
        tracing::trace!(head = kind.name(), pos = self.cursor.position(), "statement");

        match kind {
            TokenKind::Fun => self.parse_function(),
            TokenKind::Return => self.parse_return(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_block()?)),
            TokenKind::Print => {
                self.cursor.advance();
                Ok(Stmt::Print(self.parse_expression()?))
            }
            TokenKind::PrintUpper => {
                self.cursor.advance();
                Ok(Stmt::PrintUpper(self.parse_expression()?))
            }
            TokenKind::Ident(name) if matches!(self.cursor.peek_next_kind(), TokenKind::Eq) => {
                self.cursor.advance();
                self.cursor.advance();
                let value = self.parse_expression()?;
                Ok(Stmt::Var { name, value })
            }
            _ => Ok(Stmt::Expression(self.parse_expression()?)),
        }
    }

    /// `fun name(a, b) { ... }`
    fn parse_function(&mut self) -> ParseResult<Stmt> {
        self.cursor.advance();
        let name = self.cursor.consume_ident("Expect function name.")?;
        self.cursor
            .consume(&TokenKind::LParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                params.push(self.cursor.consume_ident("Expect parameter name.")?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .consume(&TokenKind::RParen, "Expect ')' after parameters.")?;

        if !self.cursor.check(&TokenKind::LBrace) {
            return Err(ParseError::expected(
                "Expect '{' before function body.",
                self.cursor.current(),
            ));
        }
        let body = self.parse_block()?;
        Ok(Stmt::function(name, params, body))
    }

    /// `return [expr]`; the value is absent before `}` or EOF.
    fn parse_return(&mut self) -> ParseResult<Stmt> {
        self.cursor.advance();
        if self.cursor.check(&TokenKind::RBrace) || self.cursor.is_at_end() {
            return Ok(Stmt::Return(None));
        }
        Ok(Stmt::Return(Some(self.parse_expression()?)))
    }

    fn parse_if(&mut self) -> ParseResult<Stmt> {
        self.cursor.advance();
        self.cursor
            .consume(&TokenKind::LParen, "Expect '(' after 'if'.")?;
        let condition = self.parse_expression()?;
        self.cursor
            .consume(&TokenKind::RParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.cursor.eat(&TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> ParseResult<Stmt> {
        self.cursor.advance();
        self.cursor
            .consume(&TokenKind::LParen, "Expect '(' after 'while'.")?;
        let condition = self.parse_expression()?;
        self.cursor
            .consume(&TokenKind::RParen, "Expect ')' after while condition.")?;
        let body = Box::new(self.parse_statement()?);
        Ok(Stmt::While { condition, body })
    }

    /// `{ stmt* }`. The current token must be `{`.
    fn parse_block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.cursor
            .consume(&TokenKind::LBrace, "Expect '{' to start block.")?;
        let mut statements = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        self.cursor
            .consume(&TokenKind::RBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
