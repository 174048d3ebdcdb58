//! # String Sequence Operations
//!
//! Parsing, filtering and classifying lists of strings. Inputs are any slice
//! of `AsRef<str>` so both `&[&str]` and `&[String]` work.
//!
//! ## Operations Provided
//!
//! - **`stringsToIntegers`**, **`removeDollars`**: leading-prefix integer parsing
//! - **`shoutIfExclaiming`**: drop questions, upper-case exclamations
//! - **`countShortWords`**: words shorter than four characters
//! - **`allRGB`**: membership in `red`/`blue`/`green`

use serde_json::Value;

use crate::ops::helpers::extract_strings;
use crate::ops::{OpFn, OpRegistry};
use crate::parse::int_or_zero;

/// The colours accepted by [`all_rgb`].
pub const RGB_COLORS: [&str; 3] = ["red", "blue", "green"];

/// Words strictly shorter than this are counted by [`count_short_words`].
pub const SHORT_WORD_LIMIT: usize = 4;

// ============================================================================
// PURE OPERATIONS
// ============================================================================

/// Parses each string's leading integer, using `0` when there is none.
///
/// ```
/// use arrayops::strings_to_integers;
///
/// assert_eq!(strings_to_integers(&["3", "abc", "12x", "-4"]), vec![3, 0, 12, -4]);
/// ```
pub fn strings_to_integers<S: AsRef<str>>(values: &[S]) -> Vec<i64> {
    values.iter().map(|s| int_or_zero(s.as_ref())).collect()
}

/// Like [`strings_to_integers`], after stripping one leading `$`.
pub fn remove_dollars<S: AsRef<str>>(amounts: &[S]) -> Vec<i64> {
    amounts
        .iter()
        .map(|s| {
            let s: &str = s.as_ref();
            int_or_zero(s.strip_prefix('$').unwrap_or(s))
        })
        .collect()
}

/// Drops messages ending in `?` and upper-cases those ending in `!`.
pub fn shout_if_exclaiming<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .filter_map(|m| {
            let m: &str = m.as_ref();
            if m.ends_with('?') {
                None
            } else if m.ends_with('!') {
                Some(m.to_uppercase())
            } else {
                Some(m.to_string())
            }
        })
        .collect()
}

/// Counts words shorter than [`SHORT_WORD_LIMIT`], measured in UTF-16 code
/// units so characters outside the BMP count twice.
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|w| {
            let w: &str = w.as_ref();
            w.encode_utf16().count() < SHORT_WORD_LIMIT
        })
        .count()
}

/// True when every colour is one of [`RGB_COLORS`]. An absent or empty list
/// is vacuously true.
///
/// ```
/// use arrayops::all_rgb;
///
/// assert!(all_rgb::<&str>(None));
/// assert!(all_rgb(Some(&["red", "blue"][..])));
/// assert!(!all_rgb(Some(&["red", "pink"][..])));
/// ```
pub fn all_rgb<S: AsRef<str>>(colors: Option<&[S]>) -> bool {
    colors.map_or(true, |colors| {
        colors.iter().all(|c| RGB_COLORS.contains(&c.as_ref()))
    })
}

// ============================================================================
// JSON ADAPTERS
// ============================================================================

/// Usage: stringsToIntegers [<string>...]
pub const OP_STRINGS_TO_INTEGERS: OpFn = |input| {
    let strs = extract_strings("stringsToIntegers", input)?;
    Ok(Value::from(strings_to_integers(&strs)))
};

/// Usage: removeDollars [<string>...]
pub const OP_REMOVE_DOLLARS: OpFn = |input| {
    let strs = extract_strings("removeDollars", input)?;
    Ok(Value::from(remove_dollars(&strs)))
};

/// Usage: shoutIfExclaiming [<string>...]
pub const OP_SHOUT_IF_EXCLAIMING: OpFn = |input| {
    let strs = extract_strings("shoutIfExclaiming", input)?;
    Ok(Value::from(shout_if_exclaiming(&strs)))
};

/// Usage: countShortWords [<string>...]
///
///   Returns: Number
pub const OP_COUNT_SHORT_WORDS: OpFn = |input| {
    let strs = extract_strings("countShortWords", input)?;
    Ok(Value::from(count_short_words(&strs)))
};

/// Usage: allRGB [<string>...] | null
///
///   Returns: Bool
pub const OP_ALL_RGB: OpFn = |input| {
    if input.is_null() {
        return Ok(Value::Bool(all_rgb::<&str>(None)));
    }
    let strs = extract_strings("allRGB", input)?;
    Ok(Value::Bool(all_rgb(Some(strs.as_slice()))))
};

pub fn register_string_ops(registry: &mut OpRegistry) {
    registry.register(
        "stringsToIntegers",
        OP_STRINGS_TO_INTEGERS,
        "Leading integer of each string; 0 when there is none.",
    );
    registry.register(
        "removeDollars",
        OP_REMOVE_DOLLARS,
        "Strip one leading \"$\", then parse like stringsToIntegers.",
    );
    registry.register(
        "shoutIfExclaiming",
        OP_SHOUT_IF_EXCLAIMING,
        "Drop \"?\" messages, upper-case \"!\" messages.",
    );
    registry.register(
        "countShortWords",
        OP_COUNT_SHORT_WORDS,
        "Number of words shorter than 4 characters.",
    );
    registry.register(
        "allRGB",
        OP_ALL_RGB,
        "True if every colour is red, blue or green (or the list is empty).",
    );
}
