#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Columns are 1-based and count characters of the input line.
pub enum ParseError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending text.
        found:  String,
        /// The column where the error occurred.
        column: usize,
    },
    /// Found a token that the grammar does not allow at this position.
    UnexpectedToken {
        /// What the grammar expected instead.
        expected: &'static str,
        /// The token encountered.
        found:    String,
        /// The column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the grammar expected instead.
        expected: &'static str,
        /// The column just past the last character.
        column:   usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column of the matching `(`.
        opened_at: usize,
        /// The column just past the last character.
        column:    usize,
    },
    /// S-expressions were nested deeper than the parser allows.
    TooDeep {
        /// The deepest nesting allowed.
        limit:  usize,
        /// The column of the first `(` past the limit.
        column: usize,
    },
}

impl ParseError {
    /// Gets the column the error points at.
    /// ## Example
    /// ```
    /// use fishlisp::error::ParseError;
    ///
    /// let err = ParseError::UnexpectedEndOfInput { expected: "expression",
    ///                                              column:   4, };
    ///
    /// assert_eq!(err.column(), 4);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. }
            | Self::ExpectedClosingParen { column, .. }
            | Self::TooDeep { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, column } => {
                write!(f, "Error at column {column}: Unexpected character '{found}'.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    column, } => write!(f,
                                                        "Error at column {column}: Expected {expected}, found '{found}'."),

            Self::UnexpectedEndOfInput { expected, column } => write!(f,
                                                                      "Error at column {column}: Expected {expected}, found end of input."),

            Self::ExpectedClosingParen { opened_at, column } => write!(f,
                                                                       "Error at column {column}: Expected closing parenthesis ')' for '(' at column {opened_at}."),

            Self::TooDeep { limit, column } => write!(f,
                                                      "Error at column {column}: Expressions are nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
