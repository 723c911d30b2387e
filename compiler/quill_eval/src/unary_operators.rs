//! Unary operator implementations.

use quill_ir::UnaryOp;

use crate::errors::{type_mismatch, EvalResult};
use crate::Value;

/// Apply a prefix operator. `+` is the identity on every value.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (op, value) {
        (UnaryOp::Plus, value) => Ok(value),
        (UnaryOp::Neg, Value::Number { value, .. }) => Ok(Value::number(-value)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::bool(!b)),
        (UnaryOp::Neg, other) => Err(type_mismatch("unary `-`", "number", other.type_name())),
        (UnaryOp::Not, other) => Err(type_mismatch("unary `!`", "boolean", other.type_name())),
    }
}
