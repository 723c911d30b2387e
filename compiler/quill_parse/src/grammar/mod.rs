//! Grammar productions.

mod expr;
mod operators;
mod stmt;
