/// Core evaluation logic.
///
/// Contains the parse-tree evaluator, the choice of evaluation strategy and
/// number literal reading.
pub mod core;

/// Operator application.
///
/// Implements the binary step of every fold: error absorption, operator
/// dispatch and the zero-divisor guard.
pub mod apply;

/// Evaluation of value trees.
///
/// Converts a parse tree into symbols and S-expressions and reduces them with
/// the same fold as the parse-tree evaluator.
pub mod value_tree;
