/// The evaluator module reduces parse trees to values.
///
/// The evaluator walks a parse tree, or the value tree read from it, and
/// folds each expression's operands left to right with its operator. Errors
/// such as division by zero are values that absorb every later step.
///
/// # Responsibilities
/// - Reads numeric literals, reporting out-of-range ones.
/// - Applies the `+ - * / % min max pow` operators.
/// - Propagates errors unchanged to the top.
pub mod evaluator;
/// The lexer module tokenizes an input line for parsing.
///
/// The lexer reads the raw line and produces numbers, symbols and
/// parentheses, each tagged with its column.
///
/// # Responsibilities
/// - Converts the input characters into tokens with source columns.
/// - Keeps numeric literal text verbatim for the evaluator.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the parse tree from tokens.
///
/// The parser applies the grammar (`number`, `symbol`, `expr`, `sexpr` and
/// the top-level program) to the token stream and produces a tree of tagged
/// nodes. Operators are resolved here, once.
///
/// # Responsibilities
/// - Converts tokens into parse tree nodes.
/// - Validates the grammar, reporting the first syntax error with its column.
pub mod parser;
/// Renders values as text.
pub mod printer;
/// The value module defines the tagged result type.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, errors, symbols and S-expressions.
/// - Implements its textual form.
pub mod value;
