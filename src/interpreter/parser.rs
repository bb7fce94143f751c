/// Parser entry points.
///
/// Turns an input line into a parse tree, starting from the top-level program
/// rule `^ symbol expr+ $`.
pub mod core;

/// Expression rules.
///
/// Implements `expr := number | symbol | sexpr` and
/// `sexpr := "(" expr* ")"`.
pub mod expr;

/// Utility functions for the parser.
///
/// Provides the `symbol` rule and helpers for reporting unexpected tokens.
pub mod utils;
