use crate::error::RuntimeError;

/// Represents a value produced or consumed by evaluation.
///
/// `Number` and `Error` are the only variants an evaluation ever returns.
/// `Symbol` and `SExpression` exist while a parse tree is being reduced as a
/// value tree. Values form a strict tree: every S-expression owns its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Number(i64),
    /// An evaluation error. Absorbing: any operation consuming it returns it
    /// unchanged.
    Error(RuntimeError),
    /// An operator name, such as `+` or `max`.
    Symbol(String),
    /// An ordered, possibly empty, sequence of values. The first cell names
    /// the operator.
    SExpression(Vec<Self>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::SExpression(v)
    }
}

impl Value {
    /// Whether the value is an error.
    ///
    /// # Example
    /// ```
    /// use fishlisp::{error::RuntimeError, interpreter::value::core::Value};
    ///
    /// assert!(Value::Error(RuntimeError::BadNumber).is_error());
    /// assert!(!Value::Number(3).is_error());
    /// ```
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Gets the integer of a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(e) => write!(f, "{e}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::SExpression(cells) => {
                write!(f, "(")?;

                for (index, value) in cells.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, ")")
            },
        }
    }
}
