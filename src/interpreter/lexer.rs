use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-7`, `3.` or `2.75`.
    ///
    /// The text is kept verbatim; the evaluator decides whether it fits.
    #[regex(r"-?[0-9]+(\.[0-9]*)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Operator characters such as `+`, and words such as `min` or `foo`.
    #[regex(r"[+\-*/%]", |lex| lex.slice().to_string())]
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Symbol(text) => write!(f, "{text}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Splits an input line into tokens paired with their 1-based columns.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` for the first character that
/// does not start a token.
///
/// # Example
/// ```
/// use fishlisp::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(- 10 4)").unwrap();
///
/// assert_eq!(tokens[1], (Token::Symbol("-".to_string()), 2));
/// assert_eq!(tokens[2], (Token::Number("10".to_string()), 4));
/// assert!(tokenize("(+ 1 #)").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = column_of(source, lexer.span().start);
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            return Err(ParseError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                         column });
        }
    }

    log::trace!("tokenized {} tokens from {source:?}", tokens.len());

    Ok(tokens)
}

/// Converts a byte offset into a 1-based character column.
pub(crate) fn column_of(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}
