//! # fishlisp
//!
//! fishlisp is a minimal interactive calculator language written in Rust.
//! Each input line is a prefix-notation S-expression of integer literals and
//! the operators `+ - * / % min max pow`, such as `+ 1 (* 2 3)`. A line is
//! parsed into a tagged tree, reduced to a single value and printed.
//! Errors such as division by zero are values that propagate to the result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{Strategy, run},
        parser::core::parse,
        printer::render,
        value::core::Value,
    },
};

/// Defines the parse tree.
///
/// This module declares the `Node` type produced by the parser and consumed
/// by the evaluator, the `Tag` enum identifying which grammar rule matched a
/// node, and the closed `Operator` enum that symbols resolve to.
///
/// # Responsibilities
/// - Defines the tree shape the evaluator relies on.
/// - Replaces rule-name and operator-name string matching with enums decided
///   once while parsing.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Syntax errors are returned by the parser and stop a line before
/// evaluation. Evaluation errors are a closed set of payload-free kinds
/// carried inside values.
///
/// # Responsibilities
/// - Defines `ParseError` with the column of the failure.
/// - Defines `RuntimeError`, the kinds an evaluation can produce.
/// - Provides the fixed sentence printed for each kind.
pub mod error;
/// Orchestrates the processing of one input line.
///
/// This module ties together lexing, parsing, evaluation, the value model and
/// printing.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and printer.
/// - Provides entry points for each phase.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads lines with history and line editing, evaluates them and prints one
/// output line per input line until interrupted.
pub mod repl;
/// General numeric helpers used by the evaluator.
///
/// # Responsibilities
/// - Read the integer part of a numeric literal, detecting overflow.
/// - Provide integer operations that never panic.
pub mod util;

/// Returns the value of one input line.
///
/// The line is parsed and, if it is well formed, evaluated with the given
/// strategy. Evaluation errors such as division by zero are part of the
/// returned `Value`; only syntax errors are returned as `Err`.
///
/// # Errors
/// Returns a `ParseError` if the line does not match the grammar. The line is
/// not evaluated in that case.
///
/// # Examples
/// ```
/// use fishlisp::{
///     error::RuntimeError,
///     get_result,
///     interpreter::{evaluator::core::Strategy, value::core::Value},
/// };
///
/// let value = get_result("+ 1 (* 2 3)", Strategy::ParseTree).unwrap();
/// assert_eq!(value, Value::Number(7));
///
/// let value = get_result("% 6 0", Strategy::ParseTree).unwrap();
/// assert_eq!(value, Value::Error(RuntimeError::DivisionByZero));
///
/// // Unmatched parenthesis.
/// assert!(get_result("+ 1 (2", Strategy::ParseTree).is_err());
/// ```
pub fn get_result(source: &str, strategy: Strategy) -> Result<Value, ParseError> {
    let tree = parse(source)?;

    Ok(run(&tree, strategy))
}

/// Returns the output line printed for one input line.
///
/// This is either the rendered value or the syntax error description.
///
/// # Examples
/// ```
/// use fishlisp::{interpret_line, interpreter::evaluator::core::Strategy};
///
/// assert_eq!(interpret_line("min 3 7 1", Strategy::ParseTree), "1");
/// assert_eq!(interpret_line("/ 6 0", Strategy::ValueTree), "Error: Division by zero!");
/// ```
#[must_use]
pub fn interpret_line(source: &str, strategy: Strategy) -> String {
    match get_result(source, strategy) {
        Ok(value) => render(&value),
        Err(e) => e.to_string(),
    }
}

/// Returns the output lines for every non-blank line of a script.
///
/// Lines are independent: an error on one line does not affect the next.
///
/// # Examples
/// ```
/// use fishlisp::{interpret_script, interpreter::evaluator::core::Strategy};
///
/// let output = interpret_script("+ 1 2\n\n/ 1 0\n", Strategy::ParseTree);
/// assert_eq!(output, vec!["3", "Error: Division by zero!"]);
/// ```
#[must_use]
pub fn interpret_script(script: &str, strategy: Strategy) -> Vec<String> {
    script.lines()
          .filter(|line| !line.trim().is_empty())
          .map(|line| interpret_line(line, strategy))
          .collect()
}
