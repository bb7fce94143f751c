use crate::{
    ast::{Node, Symbol, Tag},
    error::RuntimeError,
    interpreter::{evaluator::apply::apply, value::core::Value},
    util::num::parse_integer_literal,
};

/// Selects how a parse tree is reduced to a value.
///
/// Both strategies give the same result for every input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Walk the parse tree directly with [`evaluate`].
    #[default]
    ParseTree,
    /// Convert the parse tree into a value tree with
    /// [`Value::read`](crate::interpreter::value::core::Value::read) and
    /// reduce that with
    /// [`Value::eval`](crate::interpreter::value::core::Value::eval).
    ValueTree,
}

/// Evaluates a parse tree with the given strategy.
///
/// # Example
/// ```
/// use fishlisp::interpreter::{
///     evaluator::core::{Strategy, run},
///     parser::core::parse,
///     value::core::Value,
/// };
///
/// let tree = parse("max 3 7 1").unwrap();
///
/// assert_eq!(run(&tree, Strategy::ParseTree), Value::Number(7));
/// assert_eq!(run(&tree, Strategy::ValueTree), Value::Number(7));
/// ```
#[must_use]
pub fn run(tree: &Node, strategy: Strategy) -> Value {
    match strategy {
        Strategy::ParseTree => evaluate(tree),
        Strategy::ValueTree => Value::read(tree).eval(),
    }
}

/// Evaluates a parse tree node.
///
/// - A number node is read as a base-10 integer, truncating any fractional
///   part. An integer part outside the `i64` range yields `BadNumber`.
/// - A compound node (for a program wrapping one S-expression, that
///   S-expression) takes its operator from child 1 and its first operand
///   from child 2, then folds every following expression child into the
///   running result, left to right, stopping at the first child that is not
///   an expression. A single operand is returned unchanged.
///
/// Once the running result is an error, the fold stops and the error is the
/// result.
///
/// # Example
/// ```
/// use fishlisp::interpreter::{evaluator::core::evaluate, parser::core::parse, value::core::Value};
///
/// let tree = parse("- 10 4 3").unwrap();
/// assert_eq!(evaluate(&tree), Value::Number(3));
///
/// let tree = parse("- 5").unwrap();
/// assert_eq!(evaluate(&tree), Value::Number(5));
/// ```
#[must_use]
pub fn evaluate(node: &Node) -> Value {
    match node.tag {
        Tag::Number => number(&node.contents),
        Tag::Sexpr | Tag::Program => evaluate_compound(node.body()),
        Tag::Symbol(_) | Tag::Open | Tag::Close | Tag::Start | Tag::End => {
            RuntimeError::BadNumber.into()
        },
    }
}

/// Reads a numeric literal into a `Number`, or `BadNumber` if it does not
/// fit.
pub(crate) fn number(literal: &str) -> Value {
    parse_integer_literal(literal).map_or(RuntimeError::BadNumber.into(), Value::from)
}

fn evaluate_compound(node: &Node) -> Value {
    let op = node.children.get(1).map_or(Symbol::Unknown, |child| match child.tag {
                                             Tag::Symbol(symbol) => symbol,
                                             _ => Symbol::Unknown,
                                         });

    let Some(first) = node.children.get(2).filter(|child| child.tag.is_expr()) else {
        return RuntimeError::BadOperator.into();
    };

    let mut result = evaluate(first);

    for child in node.children.iter().skip(3).take_while(|child| child.tag.is_expr()) {
        if result.is_error() {
            break;
        }
        result = apply(result, op, evaluate(child));
        log::trace!("fold {:?} at column {} -> {result}", op, child.column);
    }

    result
}
