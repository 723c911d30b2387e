//! Runtime errors.
//!
//! Factory functions are the public API: each fills in both the structured
//! [`EvalErrorKind`] and the rendered message, so call sites never format
//! messages by hand.

use quill_ir::BinaryOp;

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("{context} expects {expected}, got {got}")]
    TypeMismatch {
        context: String,
        expected: &'static str,
        got: String,
    },

    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: String, len: usize },

    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    #[error("{name} expects {expected} {}, got {got}", plural(*.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("{type_name} is not callable")]
    NotCallable { type_name: &'static str },

    #[error("{type_name} is not indexable")]
    NotIndexable { type_name: &'static str },
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// An error raised while executing one top-level statement.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Always equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

#[cold]
pub fn type_mismatch(context: impl Into<String>, expected: &'static str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        context: context.into(),
        expected,
        got: got.to_owned(),
    })
}

/// Operands of `op` have the wrong types.
#[cold]
pub fn binary_type_mismatch(
    op: BinaryOp,
    expected: &'static str,
    left: &str,
    right: &str,
) -> EvalError {
    type_mismatch(
        format!("operator `{}`", op.as_symbol()),
        expected,
        &format!("{left} and {right}"),
    )
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    })
}

#[cold]
pub fn index_out_of_bounds(index: impl Into<String>, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds {
        index: index.into(),
        len,
    })
}

#[cold]
pub fn key_not_found(key: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::KeyNotFound { key: key.into() })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn not_indexable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIndexable { type_name })
}
