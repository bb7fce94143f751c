/// Represents one of the recognized operators.
///
/// The set is closed. Operator names are resolved to this enum once, while
/// the parse tree is built, and evaluation matches on it exhaustively.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division (`/`)
    Div,
    /// Integer remainder (`%`)
    Mod,
    /// Pairwise minimum (`min`)
    Min,
    /// Pairwise maximum (`max`)
    Max,
    /// Integer exponentiation (`pow`)
    Pow,
}

impl Operator {
    /// Every recognized operator, in the order they are listed in the
    /// grammar.
    pub const ALL: [Self; 8] = [Self::Add,
                                Self::Sub,
                                Self::Mul,
                                Self::Div,
                                Self::Mod,
                                Self::Min,
                                Self::Max,
                                Self::Pow];

    /// Resolves an operator from its source text.
    ///
    /// Matching is exact; `MIN` or `Pow` are not operators.
    ///
    /// # Example
    /// ```
    /// use fishlisp::ast::Operator;
    ///
    /// assert_eq!(Operator::from_name("max"), Some(Operator::Max));
    /// assert_eq!(Operator::from_name("foo"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Gets the source text of the operator.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Min => "min",
            Self::Max => "max",
            Self::Pow => "pow",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A symbol as it appears in the parse tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A recognized operator.
    Operator(Operator),
    /// A word that is lexically a symbol but names no operator (e.g. `foo`).
    /// Applying it yields `Error: Invalid Operator!`.
    Unknown,
}

impl Symbol {
    /// Resolves a symbol from its source text.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Operator::from_name(name).map_or(Self::Unknown, Self::Operator)
    }

    /// Gets the operator, if the symbol names one.
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(op),
            Self::Unknown => None,
        }
    }
}

/// Identifies the grammar rule that produced a parse tree node.
///
/// `Number`, `Symbol` and `Sexpr` are the three forms of the `expr` rule.
/// `Program` is the root of every successful parse. The remaining tags mark
/// delimiter leaves that compound nodes keep so that a node's children mirror
/// the matched text: `(` and `)` for an S-expression, the start and end
/// anchors for the program.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tag {
    /// A numeric literal such as `42`, `-7` or `3.5`.
    Number,
    /// An operator token.
    Symbol(Symbol),
    /// A parenthesized S-expression.
    Sexpr,
    /// The whole input line.
    Program,
    /// `(`
    Open,
    /// `)`
    Close,
    /// The start-of-input anchor.
    Start,
    /// The end-of-input anchor.
    End,
}

impl Tag {
    /// Whether the node was matched by the `expr` rule.
    ///
    /// Evaluation folds over a compound node's children while this holds,
    /// stopping at the closing delimiter.
    ///
    /// # Example
    /// ```
    /// use fishlisp::ast::Tag;
    ///
    /// assert!(Tag::Number.is_expr());
    /// assert!(Tag::Sexpr.is_expr());
    /// assert!(!Tag::Close.is_expr());
    /// ```
    #[must_use]
    pub const fn is_expr(self) -> bool {
        matches!(self, Self::Number | Self::Symbol(_) | Self::Sexpr)
    }
}

/// A node of the parse tree.
///
/// Leaves carry the literal text they matched; compound nodes carry their
/// children, delimiters included. Each node owns its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The rule that matched.
    pub tag:      Tag,
    /// The matched text for leaves, empty for compound nodes.
    pub contents: String,
    /// The 1-based column where the match starts.
    pub column:   usize,
    /// Child nodes in source order.
    pub children: Vec<Self>,
}

impl Node {
    /// Creates a leaf node.
    #[must_use]
    pub fn leaf(tag: Tag, contents: impl Into<String>, column: usize) -> Self {
        Self { tag,
               contents: contents.into(),
               column,
               children: Vec::new() }
    }

    /// Creates a compound node from its children.
    #[must_use]
    pub const fn compound(tag: Tag, column: usize, children: Vec<Self>) -> Self {
        Self { tag,
               contents: String::new(),
               column,
               children }
    }

    /// Iterates over the children matched by the `expr` rule, skipping
    /// delimiters.
    ///
    /// # Example
    /// ```
    /// use fishlisp::interpreter::parser::core::parse;
    ///
    /// let tree = parse("+ 1 (* 2 3)").unwrap();
    /// assert_eq!(tree.exprs().count(), 3);
    /// ```
    pub fn exprs(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter(|child| child.tag.is_expr())
    }

    /// Gets the node that holds the operator.
    ///
    /// This is the node itself, except for a program that wraps a single
    /// S-expression, where it is that S-expression.
    ///
    /// # Example
    /// ```
    /// use fishlisp::{ast::Tag, interpreter::parser::core::parse};
    ///
    /// assert_eq!(parse("(+ 1 2)").unwrap().body().tag, Tag::Sexpr);
    /// assert_eq!(parse("+ 1 2").unwrap().body().tag, Tag::Program);
    /// ```
    #[must_use]
    pub fn body(&self) -> &Self {
        match (self.tag, self.children.get(1)) {
            (Tag::Program, Some(inner)) if inner.tag == Tag::Sexpr && self.children.len() == 3 => {
                inner
            },
            _ => self,
        }
    }

    /// Gets the operand nodes of a compound node: every expression child
    /// after the operator.
    pub fn operands(&self) -> impl Iterator<Item = &Self> {
        self.exprs().skip(1)
    }
}
