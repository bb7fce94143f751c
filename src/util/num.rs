/// Reads the integer part of a numeric literal.
///
/// The literal may carry a leading `-` and a fractional part; the fraction is
/// discarded, truncating toward zero. Returns `None` when the literal is not
/// numeric or its integer part is outside the `i64` range.
///
/// ## Example
/// ```
/// use fishlisp::util::num::parse_integer_literal;
///
/// assert_eq!(parse_integer_literal("42"), Some(42));
/// assert_eq!(parse_integer_literal("-3.9"), Some(-3));
/// assert_eq!(parse_integer_literal("7."), Some(7));
/// assert_eq!(parse_integer_literal("99999999999999999999"), None);
/// ```
#[must_use]
pub fn parse_integer_literal(text: &str) -> Option<i64> {
    let integer_part = text.split_once('.').map_or(text, |(whole, _)| whole);

    integer_part.parse().ok()
}

/// Raises `base` to `exponent` without panicking.
///
/// - Negative exponents truncate the exact result toward zero, so only bases
///   `1` and `-1` produce a nonzero value.
/// - Results that do not fit in an `i64` saturate at `i64::MIN` or
///   `i64::MAX` depending on their sign.
///
/// ## Example
/// ```
/// use fishlisp::util::num::pow_saturating;
///
/// assert_eq!(pow_saturating(2, 10), 1024);
/// assert_eq!(pow_saturating(-2, 3), -8);
/// assert_eq!(pow_saturating(2, -1), 0);
/// assert_eq!(pow_saturating(-1, -3), -1);
/// assert_eq!(pow_saturating(10, 100), i64::MAX);
/// ```
#[must_use]
pub fn pow_saturating(base: i64, exponent: i64) -> i64 {
    let odd = exponent % 2 != 0;

    match base {
        0 if exponent < 0 => saturate(true),
        0 if exponent == 0 => 1,
        0 => 0,
        1 => 1,
        -1 => {
            if odd {
                -1
            } else {
                1
            }
        },
        _ if exponent < 0 => 0,
        _ => {
            let negative = base < 0 && odd;
            u32::try_from(exponent).ok()
                                   .and_then(|e| base.checked_pow(e))
                                   .unwrap_or_else(|| saturate(!negative))
        },
    }
}

/// Gets the saturated value for an overflowing result of the given sign.
const fn saturate(positive: bool) -> i64 {
    if positive { i64::MAX } else { i64::MIN }
}
