//! # Operation Helper Infrastructure
//!
//! Shared decoding and encoding between `serde_json::Value` and the typed
//! sequences the pure operations work on. Every adapter in `numbers` and
//! `strings` goes through these functions so shape errors read the same way
//! for every operation.

use serde_json::{Number, Value};

use crate::errors::{ArrayError, Result};

// ============================================================================
// DECODING
// ============================================================================

/// Human-readable name for a JSON value's kind, used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrows the elements of a JSON array.
pub fn expect_array<'a>(op: &str, input: &'a Value) -> Result<&'a [Value]> {
    match input {
        Value::Array(items) => Ok(items),
        other => Err(ArrayError::input_with_help(
            op,
            format!("expected an array, found {}", json_type_name(other)),
            "wrap the values in [ ]",
        )),
    }
}

/// Decodes a JSON array of numbers.
pub fn extract_numbers(op: &str, input: &Value) -> Result<Vec<f64>> {
    expect_array(op, input)?
        .iter()
        .enumerate()
        .map(|(i, item)| match item.as_f64() {
            Some(n) => Ok(n),
            None => Err(ArrayError::input(
                op,
                format!("element {} is a {}, expected number", i, json_type_name(item)),
            )),
        })
        .collect()
}

/// Decodes a JSON array of strings, borrowing from the input.
pub fn extract_strings<'a>(op: &str, input: &'a Value) -> Result<Vec<&'a str>> {
    expect_array(op, input)?
        .iter()
        .enumerate()
        .map(|(i, item)| match item.as_str() {
            Some(s) => Ok(s),
            None => Err(ArrayError::input(
                op,
                format!("element {} is a {}, expected string", i, json_type_name(item)),
            )),
        })
        .collect()
}

// ============================================================================
// ENCODING
// ============================================================================

/// Encodes a number, preferring a JSON integer when the value is integral.
///
/// Non-finite values have no JSON representation and become `null`.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return Value::from(n as i64);
    }
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}

pub fn numbers_value(values: &[f64]) -> Value {
    Value::Array(values.iter().copied().map(number_value).collect())
}
