//! Integer literal syntax

/// Parse an integer literal in RGBDS-like syntax.
///
/// Accepted forms, each optionally preceded by `-`:
///
///  * decimal: `123`
///  * binary: `%1011`
///  * hexadecimal: `$7F` (case is not significant)
///
/// Yields `None` if the text is not a literal in any of these forms, or if
/// its magnitude does not fit in an `i64`.
pub fn parse_integer(text: &str) -> Option<i64> {
    let (sign, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text),
    };

    let value = if let Some(digits) = magnitude.strip_prefix('%') {
        parse_digits(digits, 2)?
    } else if let Some(digits) = magnitude.strip_prefix('$') {
        parse_digits(digits, 16)?
    } else {
        parse_digits(magnitude, 10)?
    };

    Some(sign * value)
}

/// Parse a run of digits with no sign or prefix. `from_str_radix` would
/// otherwise accept a leading `+`.
fn parse_digits(digits: &str, radix: u32) -> Option<i64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}
