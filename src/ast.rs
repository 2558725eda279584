/// A binary arithmetic operator.
///
/// These are the five operators the language recognizes. Each knows its
/// precedence, its printable symbol, and how to apply itself to two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition, `+`.
    Add,
    /// Subtraction, `-`.
    Sub,
    /// Multiplication, `*`.
    Mul,
    /// Division, `/`.
    Div,
    /// Exponentiation, `^`.
    Pow,
}

impl Operator {
    /// Gets the binding strength of the operator.
    ///
    /// `+` and `-` bind weakest (1), `*` and `/` bind tighter (2), and `^`
    /// binds tightest (3). Equal-precedence operators always group left to
    /// right, including `^` — see [`crate::compiler::postfix::to_postfix`].
    ///
    /// ## Example
    /// ```
    /// use arbora::ast::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Gets the single-character symbol the operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Arithmetic follows IEEE-754 semantics throughout: dividing by zero
    /// produces an infinity (or NaN for `0 / 0`), and out-of-domain powers
    /// produce NaN. No operator ever reports an error.
    ///
    /// ## Example
    /// ```
    /// use arbora::ast::Operator;
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of a binary expression tree.
///
/// Leaves are operands (a variable name or a numeric literal) and internal
/// nodes are operators applied to exactly two subtrees. The shape of the enum
/// enforces the arity invariant: an operator node cannot exist without both
/// children, and a leaf cannot carry any.
///
/// Each node exclusively owns its children, so trees form strict hierarchies
/// with no sharing and drop recursively with their root.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprTree {
    /// A single-letter variable leaf, such as `x`.
    Variable {
        /// The variable's name.
        name: char,
    },
    /// A numeric literal leaf, kept in its textual form.
    ///
    /// Right after tree construction this is a single digit. Substitution
    /// produces literals holding the full rendering of a bound value, such as
    /// `2.5`.
    Literal {
        /// The literal's text.
        text: String,
    },
    /// An operator applied to two operand subtrees.
    BinaryOp {
        /// The operator.
        op:    Operator,
        /// Left operand subtree.
        left:  Box<Self>,
        /// Right operand subtree.
        right: Box<Self>,
    },
}

impl ExprTree {
    /// Gets the text a node is displayed as: the variable name, the literal
    /// text, or the operator symbol.
    ///
    /// Renderers work entirely off this label and the tree structure, so they
    /// stay decoupled from how nodes are represented.
    ///
    /// ## Example
    /// ```
    /// use arbora::ast::ExprTree;
    ///
    /// let leaf = ExprTree::Variable { name: 'x' };
    /// assert_eq!(leaf.label(), "x");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Variable { name } => name.to_string(),
            Self::Literal { text } => text.clone(),
            Self::BinaryOp { op, .. } => op.symbol().to_string(),
        }
    }

    /// Returns `true` for operand leaves and `false` for operator nodes.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Variable { .. } | Self::Literal { .. })
    }
}
