/// Largest value a literal may have, `i64::MAX`.
pub const MAX_LITERAL: u64 = 9_223_372_036_854_775_807;

/// Converts the leading decimal digits of `text` to a `u64` if and only if
/// the value fits in an `i64`.
///
/// Conversion stops at the first non-digit character; text without leading
/// digits converts to zero.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds [`MAX_LITERAL`].
///
/// ## Example
/// ```
/// use tally::util::num::{MAX_LITERAL, parse_decimal_checked};
///
/// assert_eq!(parse_decimal_checked("42", "too big!"), Ok(42));
/// assert_eq!(parse_decimal_checked("9223372036854775807", "too big!"),
///            Ok(MAX_LITERAL));
/// assert_eq!(parse_decimal_checked("9223372036854775808", "too big!"),
///            Err("too big!"));
/// ```
pub fn parse_decimal_checked<E>(text: &str, error: E) -> Result<u64, E> {
    text.bytes()
        .take_while(u8::is_ascii_digit)
        .try_fold(0_i64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(i64::from(digit - b'0'))
        })
        .and_then(|value| u64::try_from(value).ok())
        .ok_or(error)
}
