//! Expression parsing, one function per precedence level.

use crate::{ParseError, ParseResult, Parser};
use quill_ir::{BinaryOp, Builtin, Expr, TokenKind};
use quill_stack::ensure_sufficient_stack;

impl Parser<'_> {
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.parse_or())
    }

    /// One left-associative binary level: `operand (op operand)*`.
    fn parse_binary_level(
        &mut self,
        operand: fn(&mut Self) -> ParseResult<Expr>,
        match_op: fn(&Self) -> Option<BinaryOp>,
    ) -> ParseResult<Expr> {
        let mut left = operand(self)?;
        while let Some(op) = match_op(self) {
            self.cursor.advance();
            let right = operand(self)?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(Self::parse_and, Self::match_or_op)
    }

    fn parse_and(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(Self::parse_equality, Self::match_and_op)
    }

    fn parse_equality(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(Self::parse_comparison, Self::match_equality_op)
    }

    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(Self::parse_addition, Self::match_comparison_op)
    }

    fn parse_addition(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(Self::parse_multiplication, Self::match_additive_op)
    }

    fn parse_multiplication(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(Self::parse_unary, Self::match_multiplicative_op)
    }

    fn parse_unary(&mut self) -> ParseResult<Expr> {
        if let Some(op) = self.match_unary_op() {
            self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::unary(op, operand));
        }
        self.parse_call()
    }

    /// Postfix calls and indexing, chained: `f(x)[0](y)`.
    fn parse_call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.cursor.eat(&TokenKind::LParen) {
                let args = self.parse_arguments()?;
                expr = self.finish_call(expr, args)?;
            } else if self.cursor.eat(&TokenKind::LBracket) {
                let index = self.parse_expression()?;
                self.cursor
                    .consume(&TokenKind::RBracket, "Expect ']' after index.")?;
                expr = Expr::Index {
                    receiver: Box::new(expr),
                    index: Box::new(index),
                };
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Comma-separated arguments after `(`, through the closing `)`.
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .consume(&TokenKind::RParen, "Expect ')' after arguments.")?;
        Ok(args)
    }

    /// Build a call node, rewriting calls to built-ins by name.
    fn finish_call(&self, callee: Expr, args: Vec<Expr>) -> ParseResult<Expr> {
        if let Expr::Variable(name) = &callee {
            if let Some(builtin) = Builtin::from_name(self.interner.lookup(*name)) {
                return self.builtin_call(builtin, args);
            }
        }
        Ok(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }

    fn builtin_call(&self, builtin: Builtin, args: Vec<Expr>) -> ParseResult<Expr> {
        Expr::builtin(builtin, args).ok_or_else(|| {
            ParseError::builtin_arity(builtin.name(), builtin.arity(), self.cursor.previous_span())
        })
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Number(value) => {
                self.cursor.advance();
                Ok(Expr::number(value, token.lexeme.as_str()))
            }
            TokenKind::Str => {
                self.cursor.advance();
                Ok(Expr::string(token.lexeme.as_str()))
            }
            TokenKind::True => {
                self.cursor.advance();
                Ok(Expr::bool(true))
            }
            TokenKind::False => {
                self.cursor.advance();
                Ok(Expr::bool(false))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(Expr::Variable(name))
            }
            TokenKind::Input => {
                self.cursor.advance();
                self.cursor
                    .consume(&TokenKind::LParen, "Expect '(' after 'input'.")?;
                let args = self.parse_arguments()?;
                self.builtin_call(Builtin::Input, args)
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                self.parse_array()
            }
            TokenKind::Dict => {
                self.cursor.advance();
                self.parse_dict()
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let expr = self.parse_expression()?;
                self.cursor
                    .consume(&TokenKind::RParen, "Expect ')' after expression.")?;
                Ok(expr)
            }
            _ => Err(ParseError::expected_expression(token)),
        }
    }

    /// `[a, b, c]` after the opening bracket.
    fn parse_array(&mut self) -> ParseResult<Expr> {
        let mut elements = Vec::new();
        if !self.cursor.check(&TokenKind::RBracket) {
            loop {
                elements.push(self.parse_expression()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .consume(&TokenKind::RBracket, "Expect ']' after array elements.")?;
        Ok(Expr::Array(elements))
    }

    /// `dict{ k: v, ... }` after the `dict` keyword.
    fn parse_dict(&mut self) -> ParseResult<Expr> {
        self.cursor
            .consume(&TokenKind::LBrace, "Expect '{' after 'dict'.")?;
        let mut entries = Vec::new();
        if !self.cursor.check(&TokenKind::RBrace) {
            loop {
                let key = self.parse_expression()?;
                self.cursor
                    .consume(&TokenKind::Colon, "Expect ':' after dictionary key.")?;
                let value = self.parse_expression()?;
                entries.push((key, value));
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .consume(&TokenKind::RBrace, "Expect '}' after dictionary entries.")?;
        Ok(Expr::Dict(entries))
    }
}
