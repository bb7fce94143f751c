use crate::{
    ast::{Operator, Symbol},
    error::RuntimeError,
    interpreter::value::core::Value,
    util::num::pow_saturating,
};

/// Combines two values with an operator.
///
/// Errors are absorbing: if `x` is an error it is returned unchanged without
/// looking at `y`, otherwise an error `y` is returned unchanged. Two numbers
/// are combined according to the operator:
///
/// - `+`, `-`, `*` wrap around on overflow.
/// - `/` and `%` truncate toward zero and return `DivisionByZero` for a zero
///   divisor.
/// - `min` and `max` pick one of the operands.
/// - `pow` raises `x` to `y`, see
///   [`pow_saturating`](crate::util::num::pow_saturating).
///
/// An unknown operator yields `BadOperator`, and a non-numeric operand
/// yields `BadNumber`.
///
/// # Parameters
/// - `x`: The running result of a fold.
/// - `op`: The operator symbol.
/// - `y`: The next operand.
///
/// # Example
/// ```
/// use fishlisp::{
///     ast::{Operator, Symbol},
///     error::RuntimeError,
///     interpreter::{evaluator::apply::apply, value::core::Value},
/// };
///
/// let div = Symbol::Operator(Operator::Div);
///
/// assert_eq!(apply(Value::Number(7), div, Value::Number(2)), Value::Number(3));
/// assert_eq!(apply(Value::Number(7), div, Value::Number(0)),
///            Value::Error(RuntimeError::DivisionByZero));
/// assert_eq!(apply(Value::Number(7), Symbol::Unknown, Value::Number(2)),
///            Value::Error(RuntimeError::BadOperator));
/// ```
#[must_use]
pub fn apply(x: Value, op: Symbol, y: Value) -> Value {
    let (a, b) = match (x, y) {
        (error @ Value::Error(_), _) | (_, error @ Value::Error(_)) => return error,
        (Value::Number(a), Value::Number(b)) => (a, b),
        _ => return RuntimeError::BadNumber.into(),
    };

    let Some(op) = op.operator() else {
        return RuntimeError::BadOperator.into();
    };

    apply_numbers(a, op, b)
}

/// Applies a recognized operator to two integers.
fn apply_numbers(a: i64, op: Operator, b: i64) -> Value {
    use Operator::{Add, Div, Max, Min, Mod, Mul, Pow, Sub};

    match op {
        Add => Value::Number(a.wrapping_add(b)),
        Sub => Value::Number(a.wrapping_sub(b)),
        Mul => Value::Number(a.wrapping_mul(b)),
        Div | Mod if b == 0 => RuntimeError::DivisionByZero.into(),
        Div => Value::Number(a.wrapping_div(b)),
        Mod => Value::Number(a.wrapping_rem(b)),
        Min => Value::Number(a.min(b)),
        Max => Value::Number(a.max(b)),
        Pow => Value::Number(pow_saturating(a, b)),
    }
}
