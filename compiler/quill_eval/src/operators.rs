//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the set of value kinds is closed, so a
//! `match` on the operand pair covers every case.

use quill_ir::BinaryOp;

use crate::errors::{binary_type_mismatch, EvalResult};
use crate::Value;

/// Apply `op` to two already-evaluated operands.
///
/// Both operands are always evaluated by the caller, including for `and`
/// and `or`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            let (a, b) = numbers(left, right, op)?;
            Ok(Value::number(match op {
                BinaryOp::Sub => a - b,
                BinaryOp::Mul => a * b,
                _ => a / b,
            }))
        }
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let (a, b) = numbers(left, right, op)?;
            Ok(Value::bool(match op {
                BinaryOp::Lt => a < b,
                BinaryOp::LtEq => a <= b,
                BinaryOp::Gt => a > b,
                _ => a >= b,
            }))
        }
        BinaryOp::Eq => Ok(Value::bool(left == right)),
        BinaryOp::NotEq => Ok(Value::bool(left != right)),
        BinaryOp::And | BinaryOp::Or => match (left, right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::bool(if op == BinaryOp::And {
                *a && *b
            } else {
                *a || *b
            })),
            _ => Err(binary_type_mismatch(
                op,
                "booleans",
                left.type_name(),
                right.type_name(),
            )),
        },
    }
}

/// Text on either side concatenates text forms; otherwise numbers add.
fn add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Text(_), _) | (_, Value::Text(_)) => {
            let mut text = left.display_value();
            text.push_str(&right.display_value());
            Ok(Value::Text(text))
        }
        (Value::Number { value: a, .. }, Value::Number { value: b, .. }) => {
            Ok(Value::number(a + b))
        }
        _ => Err(binary_type_mismatch(
            BinaryOp::Add,
            "numbers or text",
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn numbers(left: &Value, right: &Value, op: BinaryOp) -> Result<(f64, f64), crate::EvalError> {
    match (left, right) {
        (Value::Number { value: a, .. }, Value::Number { value: b, .. }) => Ok((*a, *b)),
        _ => Err(binary_type_mismatch(
            op,
            "numbers",
            left.type_name(),
            right.type_name(),
        )),
    }
}
