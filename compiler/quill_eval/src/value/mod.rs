//! Runtime values.
//!
//! `Value` is a closed set of variants matched exhaustively at every
//! operation site. Arrays and dictionaries live behind [`Heap`] handles, so
//! copying a value aliases the container and built-in mutations are seen
//! through every alias. Functions compare by identity.

// Functions are shared by identity.
#![expect(
    clippy::disallowed_types,
    reason = "Rc<FunctionValue> gives functions identity"
)]

mod dictionary;
mod function;
mod heap;

use std::fmt;
use std::rc::Rc;

use quill_ir::FunctionDecl;

use crate::Environment;

pub use dictionary::Dictionary;
pub use function::FunctionValue;
pub use heap::Heap;

/// Text form of every function value.
pub const FUNCTION_TEXT: &str = "<function>";

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// A number, with the literal text it was written as when it came
    /// straight from source.
    Number {
        value: f64,
        text: Option<Box<str>>,
    },
    Bool(bool),
    Text(String),
    Array(Heap<Vec<Value>>),
    Dict(Heap<Dictionary>),
    Function(Rc<FunctionValue>),
}

impl Value {
    // Factory methods

    /// A computed number.
    #[inline]
    pub fn number(value: f64) -> Self {
        Value::Number { value, text: None }
    }

    /// A number literal, printed exactly as written.
    pub fn number_literal(value: f64, text: &str) -> Self {
        Value::Number {
            value,
            text: Some(text.into()),
        }
    }

    #[inline]
    pub fn bool(value: bool) -> Self {
        Value::Bool(value)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    /// The empty text, result of calls that return nothing.
    pub fn empty_text() -> Self {
        Value::Text(String::new())
    }

    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    pub fn dict(dict: Dictionary) -> Self {
        Value::Dict(Heap::new(dict))
    }

    pub fn function(decl: Rc<FunctionDecl>, closure: Environment) -> Self {
        Value::Function(Rc::new(FunctionValue::new(decl, closure)))
    }

    // Accessors

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number { .. } => "number",
            Value::Bool(_) => "boolean",
            Value::Text(_) => "text",
            Value::Array(_) => "array",
            Value::Dict(_) => "dictionary",
            Value::Function(_) => "function",
        }
    }

    /// The text form written by `print` and used by `+` concatenation.
    ///
    /// A container that contains itself prints as `[...]` or `{...}` at the
    /// point of recursion.
    pub fn display_value(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out, &mut Vec::new());
        out
    }

    fn write_text(&self, out: &mut String, open: &mut Vec<*const ()>) {
        match self {
            Value::Number { value, text } => match text {
                Some(text) => out.push_str(text),
                None => out.push_str(&format_number(*value)),
            },
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Text(s) => out.push_str(s),
            Value::Array(items) => {
                if open.contains(&items.addr()) {
                    out.push_str("[...]");
                    return;
                }
                open.push(items.addr());
                out.push('[');
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_text(out, open);
                }
                out.push(']');
                open.pop();
            }
            Value::Dict(dict) => {
                if open.contains(&dict.addr()) {
                    out.push_str("{...}");
                    return;
                }
                open.push(dict.addr());
                out.push('{');
                for (i, (key, value)) in dict.borrow().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    key.write_text(out, open);
                    out.push_str(": ");
                    value.write_text(out, open);
                }
                out.push('}');
                open.pop();
            }
            Value::Function(_) => out.push_str(FUNCTION_TEXT),
        }
    }
}

/// Text form of a computed number.
///
/// Integral values print without a fractional part (`3`, not `3.0`);
/// non-finite values print as `inf`, `-inf`, and `NaN`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_value())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number { value, text } => f
                .debug_struct("Number")
                .field("value", value)
                .field("text", text)
                .finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Array(_) | Value::Dict(_) => {
                write!(f, "{}({})", self.type_name(), self.display_value())
            }
            Value::Function(func) => func.fmt(f),
        }
    }
}

/// Container pairs whose comparison is in progress.
type Comparing = Vec<(*const (), *const ())>;

/// Structural equality per variant; different variants are never equal.
///
/// Number equality ignores the literal text and follows IEEE-754, so
/// `NaN != NaN`. Self-containing containers compare equal when their
/// shapes match: a pair met again while it is still being compared counts
/// as equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.eq_inner(other, &mut Vec::new())
    }
}

impl Value {
    #[allow(clippy::float_cmp, reason = "IEEE-754 equality is the language's number equality")]
    pub(super) fn eq_inner(&self, other: &Value, comparing: &mut Comparing) -> bool {
        match (self, other) {
            (Value::Number { value: a, .. }, Value::Number { value: b, .. }) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                let pair = (a.addr(), b.addr());
                if a.ptr_eq(b) || comparing.contains(&pair) {
                    return true;
                }
                comparing.push(pair);
                let (a, b) = (a.borrow(), b.borrow());
                let equal = a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|(x, y)| x.eq_inner(y, comparing));
                comparing.pop();
                equal
            }
            (Value::Dict(a), Value::Dict(b)) => {
                let pair = (a.addr(), b.addr());
                if a.ptr_eq(b) || comparing.contains(&pair) {
                    return true;
                }
                comparing.push(pair);
                let equal = a.borrow().eq_inner(&b.borrow(), comparing);
                comparing.pop();
                equal
            }
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Whether `self` and `other` name the same dictionary entry.
    ///
    /// Key equality is value equality, except that a NaN key matches a NaN
    /// key so `put` and `dict_remove` can find it again.
    pub(super) fn same_key(&self, other: &Value, comparing: &mut Comparing) -> bool {
        match (self, other) {
            (Value::Number { value: a, .. }, Value::Number { value: b, .. })
                if a.is_nan() && b.is_nan() =>
            {
                true
            }
            _ => self.eq_inner(other, comparing),
        }
    }
}
