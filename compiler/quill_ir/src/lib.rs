//! Quill IR - the data shared by every phase of the interpreter.
//!
//! - [`Span`]: byte range into the source text
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - [`Token`] / [`TokenKind`]: lexer output, parser input
//! - [`Expr`] / [`Stmt`]: the syntax tree the evaluator walks
//!
//! The tree is built once by the parser and never mutated afterwards;
//! function bodies are reference-counted so runtime closures can share them.

mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{BinaryOp, Builtin, Expr, FunctionDecl, Literal, Stmt, UnaryOp};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{LineCol, Span};
pub use token::{Token, TokenKind};
