/// Syntax errors.
///
/// Defines all error types that can occur while lexing and parsing an input
/// line. A syntax error is reported as-is and evaluation never starts.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the closed set of error kinds the evaluator can produce, such as
/// division by zero or an unrecognized operator. These are carried inside
/// `Value::Error` and absorb every operation that consumes them.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
