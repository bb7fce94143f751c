use crate::interpreter::value::core::Value;

/// Renders a value as the text shown to the user.
///
/// Numbers print in decimal and errors as a fixed sentence per kind; the
/// operands that caused an error are never shown. Symbols and S-expressions
/// are not results of evaluation, but render in prefix form, e.g.
/// `(+ 1 2)`, so that value trees can be inspected.
///
/// # Example
/// ```
/// use fishlisp::{
///     error::RuntimeError,
///     interpreter::{printer::render, value::core::Value},
/// };
///
/// assert_eq!(render(&Value::Number(-12)), "-12");
/// assert_eq!(render(&Value::Error(RuntimeError::DivisionByZero)),
///            "Error: Division by zero!");
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    value.to_string()
}
