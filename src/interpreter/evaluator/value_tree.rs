use crate::{
    ast::{Node, Symbol, Tag},
    error::RuntimeError,
    interpreter::{
        evaluator::{apply::apply, core::number},
        value::core::Value,
    },
};

impl Value {
    /// Converts a parse tree into a value tree.
    ///
    /// Numbers are read immediately, so an out-of-range literal becomes
    /// `Error(BadNumber)` in place. Symbols keep their text, and compound
    /// nodes become S-expressions of their expression children; delimiters
    /// are dropped. The top-level program reads as an S-expression whose
    /// first cell is the operator, whether or not it was parenthesized.
    ///
    /// # Example
    /// ```
    /// use fishlisp::interpreter::{parser::core::parse, value::core::Value};
    ///
    /// let tree = parse("+ 1 (* 2 3)").unwrap();
    ///
    /// assert_eq!(Value::read(&tree).to_string(), "(+ 1 (* 2 3))");
    /// ```
    #[must_use]
    pub fn read(node: &Node) -> Self {
        match node.tag {
            Tag::Number => number(&node.contents),
            Tag::Symbol(_) => Self::Symbol(node.contents.clone()),
            Tag::Sexpr | Tag::Program => {
                node.body().exprs().map(Self::read).collect::<Vec<_>>().into()
            },
            Tag::Open | Tag::Close | Tag::Start | Tag::End => RuntimeError::BadNumber.into(),
        }
    }

    /// Reduces a value tree to a single value.
    ///
    /// An S-expression resolves its first cell as the operator and folds the
    /// remaining cells left to right, exactly like
    /// [`evaluate`](crate::interpreter::evaluator::core::evaluate) does on the
    /// parse tree. Numbers and errors evaluate to themselves; a symbol in
    /// operand position is `BadNumber`.
    ///
    /// # Example
    /// ```
    /// use fishlisp::{
    ///     error::RuntimeError,
    ///     interpreter::{parser::core::parse, value::core::Value},
    /// };
    ///
    /// let tree = parse("+ (/ 1 0) 5").unwrap();
    ///
    /// assert_eq!(Value::read(&tree).eval(), Value::Error(RuntimeError::DivisionByZero));
    /// ```
    #[must_use]
    pub fn eval(self) -> Self {
        match self {
            Self::SExpression(cells) => Self::eval_sexpr(cells),
            Self::Symbol(_) => RuntimeError::BadNumber.into(),
            value @ (Self::Number(_) | Self::Error(_)) => value,
        }
    }

    fn eval_sexpr(cells: Vec<Self>) -> Self {
        let mut cells = cells.into_iter();

        let op = match cells.next() {
            Some(Self::Symbol(name)) => Symbol::resolve(&name),
            _ => Symbol::Unknown,
        };

        let Some(first) = cells.next() else {
            return RuntimeError::BadOperator.into();
        };

        cells.fold(first.eval(), |result, cell| {
                 if result.is_error() {
                     result
                 } else {
                     apply(result, op, cell.eval())
                 }
             })
    }
}
