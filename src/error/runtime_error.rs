#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Represents all errors that can occur during evaluation.
///
/// The set is closed and the kinds carry no payload: the operands that caused
/// an error are not kept.
pub enum RuntimeError {
    /// The divisor of `/` or `%` was zero.
    DivisionByZero,
    /// The operator is not among `+ - * / % min max pow`, or there is nothing
    /// to apply it to.
    BadOperator,
    /// A numeric literal is outside the integer range, or an operand is not a
    /// number.
    BadNumber,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero!"),
            Self::BadOperator => write!(f, "Error: Invalid Operator!"),
            Self::BadNumber => write!(f, "Error: Invalid Number!"),
        }
    }
}

impl std::error::Error for RuntimeError {}
