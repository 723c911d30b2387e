//! Indexing and the built-in container operations.
//!
//! Containers are mutated in place through their shared handle, so every
//! alias of an array or dictionary sees the change.

use crate::errors::{
    index_out_of_bounds, key_not_found, not_indexable, type_mismatch, EvalError, EvalResult,
};
use crate::value::format_number;
use crate::Value;

/// `receiver[index]` on an array (numeric index) or dictionary (key).
pub(super) fn index(receiver: &Value, index: &Value) -> EvalResult {
    match receiver {
        Value::Array(items) => {
            let items = items.borrow();
            let position = array_index(index, items.len(), "array index")?;
            Ok(items[position].clone())
        }
        Value::Dict(dict) => dict
            .borrow()
            .get(index)
            .ok_or_else(|| key_not_found(index.display_value())),
        other => Err(not_indexable(other.type_name())),
    }
}

/// `append(array, element)`: push and return the same array.
pub(super) fn append(array: Value, element: Value) -> EvalResult {
    let Value::Array(items) = &array else {
        return Err(type_mismatch("append", "array", array.type_name()));
    };
    items.borrow_mut().push(element);
    Ok(array)
}

/// `remove(array, index)`: remove the element and return its text form.
pub(super) fn remove(array: &Value, index: &Value) -> EvalResult {
    let Value::Array(items) = array else {
        return Err(type_mismatch("remove", "array", array.type_name()));
    };
    let position = array_index(index, items.borrow().len(), "remove index")?;
    let removed = items.borrow_mut().remove(position);
    Ok(Value::Text(removed.display_value()))
}

/// `put(dict, key, value)`: insert or overwrite and return the same dictionary.
pub(super) fn put(dict: Value, key: Value, value: Value) -> EvalResult {
    let Value::Dict(entries) = &dict else {
        return Err(type_mismatch("put", "dictionary", dict.type_name()));
    };
    // Find before borrowing mutably; the key may be the dictionary itself.
    let position = entries.borrow().position(&key);
    match position {
        Some(position) => entries.borrow_mut().set_at(position, value),
        None => entries.borrow_mut().push(key, value),
    }
    Ok(dict)
}

/// `dict_remove(dict, key)`: remove the entry and return its value.
pub(super) fn dict_remove(dict: &Value, key: &Value) -> EvalResult {
    let Value::Dict(entries) = dict else {
        return Err(type_mismatch("dict_remove", "dictionary", dict.type_name()));
    };
    let position = entries.borrow().position(key);
    position
        .and_then(|position| entries.borrow_mut().remove_at(position))
        .ok_or_else(|| key_not_found(key.display_value()))
}

/// Convert a numeric index, truncated toward zero, to a position in
/// `0..len`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "bounds are checked on the float before converting"
)]
fn array_index(index: &Value, len: usize, context: &str) -> Result<usize, EvalError> {
    let Some(number) = index.as_number() else {
        return Err(type_mismatch(context, "number", index.type_name()));
    };
    let truncated = number.trunc();
    if truncated.is_nan() || truncated < 0.0 || truncated >= len as f64 {
        return Err(index_out_of_bounds(format_number(truncated), len));
    }
    Ok(truncated as usize)
}
