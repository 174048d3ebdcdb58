//! Leading-numeric-prefix integer parsing.
//!
//! `"12abc"` parses as `12`; only a string with no integer prefix at all is a
//! failure. Accepted grammar, after skipping leading whitespace:
//!
//! ```text
//! [+|-] ( 0x hexdigits | 0X hexdigits | decimaldigits ) <anything>
//! ```

use tracing::trace;

use crate::errors::ParseIntError;

/// Parses the longest integer literal at the start of `input`.
///
/// Magnitudes that do not fit in an `i64` saturate to `i64::MAX` / `i64::MIN`.
///
/// ```
/// use arrayops::parse::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("12x"), Ok(12));
/// assert_eq!(parse_int_prefix("  -0x1f"), Ok(-31));
/// assert!(parse_int_prefix("abc").is_err());
/// ```
pub fn parse_int_prefix(input: &str) -> Result<i64, ParseIntError> {
    let trimmed = input.trim_start_matches(is_js_whitespace);

    let (negative, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut magnitude: u64 = 0;
    let mut consumed = 0usize;
    for d in digits.chars().map_while(|c| c.to_digit(radix)) {
        magnitude = magnitude
            .saturating_mul(u64::from(radix))
            .saturating_add(u64::from(d));
        consumed += 1;
    }

    if consumed == 0 {
        return Err(ParseIntError::NoDigits {
            input: input.to_string(),
        });
    }

    let signed = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    // Clamped into range, so the narrowing cast is lossless.
    Ok(signed.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}

/// JavaScript's WhiteSpace and LineTerminator set: Unicode `White_Space`
/// without U+0085, plus U+FEFF.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Parses like [`parse_int_prefix`] but maps "no integer prefix" to `0`.
pub fn int_or_zero(input: &str) -> i64 {
    match parse_int_prefix(input) {
        Ok(n) => n,
        Err(err) => {
            trace!(%err, "unparseable integer, using 0");
            0
        }
    }
}
