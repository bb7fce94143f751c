use std::iter::Peekable;

use crate::{
    ast::{Node, Operator, Symbol, Tag},
    error::ParseError,
    interpreter::{
        lexer::{Token, column_of, tokenize},
        parser::{
            expr::{parse_expr, parse_sexpr},
            utils::{parse_symbol, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest S-expression nesting a line may have. Evaluation recurses once per
/// level, so deeper input is rejected before it can exhaust the stack.
pub const MAX_NESTING: usize = 512;

/// Parses a full input line into a parse tree.
///
/// This is the entry point of the parsing service: it tokenizes the line and
/// applies the top-level program rule. The line must consist of exactly one
/// program; no partial result is returned on failure.
///
/// # Errors
/// Returns a `ParseError` describing the first syntax error found.
///
/// # Example
/// ```
/// use fishlisp::{ast::Tag, interpreter::parser::core::parse};
///
/// let tree = parse("+ 1 (* 2 3)").unwrap();
/// assert_eq!(tree.tag, Tag::Program);
/// assert_eq!(tree.children[1].contents, "+");
///
/// assert!(parse("+ 1 (* 2 3").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    let tokens = tokenize(source)?;
    let end = column_of(source, source.len());
    let mut iter = tokens.iter().peekable();

    let program = parse_program(&mut iter, end)?;
    log::debug!("parsed {source:?} into {} operands", program.body().operands().count());

    Ok(program)
}

/// Parses the top-level program rule.
///
/// Grammar: `program := ^ symbol expr+ $ | ^ sexpr $`
///
/// The resulting node's children are the start anchor, the operator, every
/// operand and the end anchor, in that order. A line that is one whole
/// S-expression, such as `(+ 1 2)`, is kept wrapped: the children are the
/// start anchor, that S-expression and the end anchor.
///
/// The operator comes first, so a leading negative literal such as `-5 2`
/// reads as the operator `-` followed by `5` and `2`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `end`: The column just past the last character, for end-of-input
///   errors.
///
/// # Errors
/// - `UnexpectedToken` if the line does not start with an operator or `(`,
///   or if anything follows a wrapped S-expression.
/// - `UnexpectedEndOfInput` if the operator has no operands.
/// - `TooDeep` if S-expressions nest deeper than [`MAX_NESTING`].
/// - Propagates any errors from operand parsing.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>, end: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut children = vec![Node::leaf(Tag::Start, "", 1)];

    if let Some((Token::LParen, _)) = tokens.peek() {
        children.push(parse_sexpr(tokens, end, 0)?);

        if let Some((tok, column)) = tokens.next() {
            return Err(unexpected("end of input", tok, *column));
        }
        children.push(Node::leaf(Tag::End, "", end));

        return Ok(Node::compound(Tag::Program, 1, children));
    }

    if let Some((Token::Number(text), column)) = tokens.peek()
       && let Some(magnitude) = text.strip_prefix('-')
    {
        children.push(Node::leaf(Tag::Symbol(Symbol::Operator(Operator::Sub)), "-", *column));
        children.push(Node::leaf(Tag::Number, magnitude, column + 1));
        tokens.next();
    } else {
        children.push(parse_symbol(tokens, end)?);
        children.push(parse_expr(tokens, end, 0)?);
    }

    while tokens.peek().is_some() {
        children.push(parse_expr(tokens, end, 0)?);
    }

    children.push(Node::leaf(Tag::End, "", end));

    Ok(Node::compound(Tag::Program, 1, children))
}
