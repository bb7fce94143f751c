use std::iter::Peekable;

use crate::{
    ast::{Node, Symbol, Tag},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a symbol and resolves it to an operator.
///
/// Grammar: `symbol := "+" | "-" | "*" | "/" | "%" | word`
///
/// Resolution happens here, once. A word that names no operator still
/// parses, as `Symbol::Unknown`, so that applying it is reported by the
/// evaluator rather than as a syntax error.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not a symbol,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_symbol<'a, I>(tokens: &mut Peekable<I>,
                                                          end: usize)
                                                          -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Symbol(name), column)) => {
            Ok(Node::leaf(Tag::Symbol(Symbol::resolve(name)), name.as_str(), *column))
        },
        Some((tok, column)) => Err(unexpected("operator", tok, *column)),
        None => Err(end_of_input("operator", end)),
    }
}

/// Builds an `UnexpectedToken` error.
pub(in crate::interpreter::parser) fn unexpected(expected: &'static str,
                                                 found: &Token,
                                                 column: usize)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected,
                                  found: found.to_string(),
                                  column }
}

/// Builds an `UnexpectedEndOfInput` error.
pub(in crate::interpreter::parser) const fn end_of_input(expected: &'static str,
                                                         column: usize)
                                                         -> ParseError {
    ParseError::UnexpectedEndOfInput { expected, column }
}
