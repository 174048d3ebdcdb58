//! # Numeric Sequence Operations
//!
//! All operations in this module are pure: they borrow the input slice and
//! return a freshly allocated result.
//!
//! ## Operations Provided
//!
//! - **`bookEndList`**: first and last element
//! - **`tripleNumbers`**: every element times three
//! - **`makeMath`**: `"<sum>=<a>+<b>+..."`
//! - **`injectPositive`**: insert the running sum after the first negative

use serde_json::Value;

use crate::ops::helpers::{extract_numbers, number_value, numbers_value};
use crate::ops::{OpFn, OpRegistry};

// ============================================================================
// PURE OPERATIONS
// ============================================================================

/// Returns just the first and last element.
///
/// An empty input gives an empty list and a single element is repeated.
///
/// ```
/// use arrayops::book_end_list;
///
/// assert_eq!(book_end_list::<i32>(&[]), Vec::<i32>::new());
/// assert_eq!(book_end_list(&[5]), vec![5, 5]);
/// assert_eq!(book_end_list(&[1, 2, 3, 4]), vec![1, 4]);
/// ```
pub fn book_end_list<T: Clone>(values: &[T]) -> Vec<T> {
    match values {
        [] => Vec::new(),
        [only] => vec![only.clone(), only.clone()],
        [first, .., last] => vec![first.clone(), last.clone()],
    }
}

pub fn triple_numbers(values: &[f64]) -> Vec<f64> {
    values.iter().map(|n| n * 3.0).collect()
}

/// Writes the addends out as a sum equation, e.g. `[1, 2, 3]` becomes
/// `"6=1+2+3"`. An empty input becomes `"0=0"`.
pub fn make_math(addends: &[f64]) -> String {
    let sum = addends.iter().fold(0.0, |acc, n| acc + n);
    let terms = if addends.is_empty() {
        "0".to_string()
    } else {
        addends
            .iter()
            .map(|n| format_number(*n))
            .collect::<Vec<_>>()
            .join("+")
    };
    format!("{}={}", format_number(sum), terms)
}

/// Copies `values` and inserts the sum of everything before the first
/// negative number directly after it. Without a negative the sum of the whole
/// list is appended.
///
/// ```
/// use arrayops::inject_positive;
///
/// assert_eq!(inject_positive(&[1.0, 9.0, -5.0, 7.0]), vec![1.0, 9.0, -5.0, 10.0, 7.0]);
/// assert_eq!(inject_positive(&[1.0, 9.0, 7.0]), vec![1.0, 9.0, 7.0, 17.0]);
/// ```
pub fn inject_positive(values: &[f64]) -> Vec<f64> {
    let first_negative = values.iter().position(|n| *n < 0.0);
    let prefix_end = first_negative.unwrap_or(values.len());
    let sum = values[..prefix_end].iter().fold(0.0, |acc, n| acc + n);

    let insert_at = first_negative.map_or(values.len(), |i| i + 1);
    let mut result = Vec::with_capacity(values.len() + 1);
    result.extend_from_slice(values);
    result.insert(insert_at, sum);
    result
}

/// Renders a number the way JavaScript's `Number#toString` does: no trailing
/// `.0` for integral values, exponent form outside `[1e-6, 1e21)`.
fn format_number(n: f64) -> String {
    let magnitude = n.abs();
    if n == 0.0 {
        // Also catches -0.0.
        "0".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if magnitude >= 1e21 || magnitude < 1e-6 {
        exponent_form(n)
    } else {
        n.to_string()
    }
}

/// `1e21` becomes `"1e+21"`, `1.5e-7` stays `"1.5e-7"`.
fn exponent_form(n: f64) -> String {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => formatted,
    }
}

// ============================================================================
// JSON ADAPTERS
// ============================================================================

/// Usage: bookEndList [<number>...]
pub const OP_BOOK_END_LIST: OpFn = |input| {
    let nums = extract_numbers("bookEndList", input)?;
    Ok(numbers_value(&book_end_list(&nums)))
};

/// Usage: tripleNumbers [<number>...]
pub const OP_TRIPLE_NUMBERS: OpFn = |input| {
    let nums = extract_numbers("tripleNumbers", input)?;
    Ok(numbers_value(&triple_numbers(&nums)))
};

/// Usage: makeMath [<number>...]
///
///   Returns: String
pub const OP_MAKE_MATH: OpFn = |input| {
    let nums = extract_numbers("makeMath", input)?;
    Ok(Value::String(make_math(&nums)))
};

/// Usage: injectPositive [<number>...]
pub const OP_INJECT_POSITIVE: OpFn = |input| {
    let nums = extract_numbers("injectPositive", input)?;
    Ok(Value::Array(
        inject_positive(&nums).into_iter().map(number_value).collect(),
    ))
};

pub fn register_number_ops(registry: &mut OpRegistry) {
    registry.register(
        "bookEndList",
        OP_BOOK_END_LIST,
        "First and last element; a single element is repeated.",
    );
    registry.register(
        "tripleNumbers",
        OP_TRIPLE_NUMBERS,
        "Every number multiplied by 3.",
    );
    registry.register(
        "makeMath",
        OP_MAKE_MATH,
        "Sum equation such as \"6=1+2+3\".",
    );
    registry.register(
        "injectPositive",
        OP_INJECT_POSITIVE,
        "Sum of the values before the first negative, inserted after it.",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_end_list() {
        assert!(book_end_list::<f64>(&[]).is_empty());
        assert_eq!(book_end_list(&[5.0]), vec![5.0, 5.0]);
        assert_eq!(book_end_list(&[1.0, 2.0]), vec![1.0, 2.0]);
        assert_eq!(book_end_list(&[1.0, 2.0, 3.0, 4.0]), vec![1.0, 4.0]);
    }

    #[test]
    fn test_book_end_list_does_not_touch_input() {
        let input = vec![7, 8, 9];
        let _ = book_end_list(&input);
        assert_eq!(input, vec![7, 8, 9]);
    }

    #[test]
    fn test_triple_numbers() {
        assert_eq!(triple_numbers(&[1.0, -2.0, 0.0]), vec![3.0, -6.0, 0.0]);
        assert_eq!(triple_numbers(&[0.5]), vec![1.5]);
        assert!(triple_numbers(&[]).is_empty());
    }

    #[test]
    fn test_make_math() {
        assert_eq!(make_math(&[1.0, 2.0, 3.0]), "6=1+2+3");
        assert_eq!(make_math(&[]), "0=0");
        assert_eq!(make_math(&[4.0]), "4=4");
        assert_eq!(make_math(&[-1.0, 1.5]), "0.5=-1+1.5");
        assert_eq!(make_math(&[-2.0, 2.0]), "0=-2+2");
    }

    #[test]
    fn test_make_math_zero_terms() {
        assert_eq!(make_math(&[0.0, -0.0]), "0=0+0");
    }

    #[test]
    fn test_make_math_exponent_notation() {
        assert_eq!(make_math(&[1e21]), "1e+21=1e+21");
        assert_eq!(make_math(&[1e-7]), "1e-7=1e-7");
        assert_eq!(make_math(&[-1.5e21]), "-1.5e+21=-1.5e+21");
        assert_eq!(make_math(&[1e20]), "100000000000000000000=100000000000000000000");
        assert_eq!(make_math(&[0.000001]), "0.000001=0.000001");
    }

    #[test]
    fn test_inject_positive() {
        assert_eq!(
            inject_positive(&[1.0, 9.0, -5.0, 7.0]),
            vec![1.0, 9.0, -5.0, 10.0, 7.0]
        );
        assert_eq!(inject_positive(&[1.0, 9.0, 7.0]), vec![1.0, 9.0, 7.0, 17.0]);
    }

    #[test]
    fn test_inject_positive_edges() {
        assert_eq!(inject_positive(&[]), vec![0.0]);
        assert_eq!(inject_positive(&[-3.0]), vec![-3.0, 0.0]);
        assert_eq!(inject_positive(&[-3.0, 4.0]), vec![-3.0, 0.0, 4.0]);
        assert_eq!(
            inject_positive(&[2.0, -1.0, -2.0]),
            vec![2.0, -1.0, 2.0, -2.0]
        );
        assert_eq!(inject_positive(&[0.0, 5.0, -1.0]), vec![0.0, 5.0, -1.0, 5.0]);
    }

    #[test]
    fn test_adapters() {
        assert_eq!(OP_BOOK_END_LIST(&json!([1, 2, 3])).unwrap(), json!([1, 3]));
        assert!(OP_BOOK_END_LIST(&json!(["a", 2, "c"])).is_err());
        assert_eq!(OP_TRIPLE_NUMBERS(&json!([1, -2, 0])).unwrap(), json!([3, -6, 0]));
        assert_eq!(OP_MAKE_MATH(&json!([1, 2, 3])).unwrap(), json!("6=1+2+3"));
        assert_eq!(
            OP_INJECT_POSITIVE(&json!([1, 9, -5, 7])).unwrap(),
            json!([1, 9, -5, 10, 7])
        );
        assert!(OP_MAKE_MATH(&json!(["1"])).is_err());
    }
}
