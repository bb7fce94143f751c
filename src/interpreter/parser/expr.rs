use std::iter::Peekable;

use crate::{
    ast::{Node, Tag},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_NESTING, ParseResult},
            utils::{end_of_input, parse_symbol, unexpected},
        },
    },
};

/// Parses a single expression.
///
/// Grammar: `expr := number | symbol | sexpr`
///
/// Numbers are kept as text; range checking happens during evaluation.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expression.
/// - `end`: The column just past the last character.
/// - `depth`: How many S-expressions enclose this expression.
///
/// # Errors
/// - `UnexpectedToken` on a stray `)`.
/// - `UnexpectedEndOfInput` if no tokens are left.
/// - Propagates any errors from S-expression parsing.
pub fn parse_expr<'a, I>(tokens: &mut Peekable<I>, end: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Number(text), column)) => {
            let node = Node::leaf(Tag::Number, text.as_str(), *column);
            tokens.next();
            Ok(node)
        },
        Some((Token::Symbol(_), _)) => parse_symbol(tokens, end),
        Some((Token::LParen, _)) => parse_sexpr(tokens, end, depth),
        Some((tok, column)) => Err(unexpected("expression", tok, *column)),
        None => Err(end_of_input("expression", end)),
    }
}

/// Parses a parenthesized S-expression.
///
/// Grammar: `sexpr := "(" expr* ")"`
///
/// The empty S-expression `()` is accepted here; giving it a meaning is left
/// to the evaluator.
///
/// # Errors
/// - `UnexpectedToken` if the next token is not `(`.
/// - `ExpectedClosingParen` if the input ends before the matching `)`.
/// - `TooDeep` if `depth` has reached [`MAX_NESTING`].
/// - Propagates any errors from nested expressions.
pub fn parse_sexpr<'a, I>(tokens: &mut Peekable<I>, end: usize, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let opened_at = match tokens.next() {
        Some((Token::LParen, column)) => *column,
        Some((tok, column)) => return Err(unexpected("'('", tok, *column)),
        None => return Err(end_of_input("'('", end)),
    };

    if depth >= MAX_NESTING {
        return Err(ParseError::TooDeep { limit:  MAX_NESTING,
                                         column: opened_at, });
    }

    let mut children = vec![Node::leaf(Tag::Open, "(", opened_at)];

    loop {
        match tokens.peek() {
            Some((Token::RParen, column)) => {
                children.push(Node::leaf(Tag::Close, ")", *column));
                tokens.next();
                break;
            },
            Some(_) => children.push(parse_expr(tokens, end, depth + 1)?),
            None => {
                return Err(ParseError::ExpectedClosingParen { opened_at,
                                                              column: end });
            },
        }
    }

    Ok(Node::compound(Tag::Sexpr, opened_at, children))
}
