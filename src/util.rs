/// Integer helpers.
///
/// This module provides the numeric building blocks of evaluation: reading
/// an integer out of a numeric literal, and arithmetic that stays total on
/// `i64` so that no operand combination panics.
///
/// Literal parsing returns an `Option`, which is `None` when the integer part
/// does not fit in an `i64`.
pub mod num;
