#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing, postfix conversion, or
/// tree construction.
pub enum ParseError {
    /// Found a character that is neither an operand, an operator, a
    /// parenthesis, nor whitespace.
    UnexpectedCharacter {
        /// The character encountered.
        found:  String,
        /// The byte column where the error occurred.
        column: usize,
    },
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// A closing parenthesis `)` had no matching `(`.
    UnmatchedCloseParen {
        /// The byte column of the `)`.
        column: usize,
    },
    /// An opening parenthesis `(` was never closed.
    UnmatchedOpenParen {
        /// The byte column of the `(`.
        column: usize,
    },
    /// An operator appeared with fewer than two operands available.
    MissingOperands {
        /// The operator's symbol.
        operator: char,
    },
    /// The expression fell apart into several disconnected subtrees instead
    /// of a single rooted one.
    DanglingOperands {
        /// How many subtrees were left over.
        count: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, column } => {
                write!(f, "Error at column {column}: Unexpected character: {found}.")
            },

            Self::EmptyExpression => write!(f, "Error: Expression is empty."),

            Self::UnmatchedCloseParen { column } => write!(f,
                                                           "Error at column {column}: Closing parenthesis ')' has no matching '('."),

            Self::UnmatchedOpenParen { column } => write!(f,
                                                          "Error at column {column}: Opening parenthesis '(' is never closed."),

            Self::MissingOperands { operator } => write!(f,
                                                         "Error: Operator '{operator}' needs two operands, but fewer were available."),

            Self::DanglingOperands { count } => write!(f,
                                                       "Error: Expression left {count} disconnected subtrees, but exactly one tree is required."),
        }
    }
}

impl std::error::Error for ParseError {}
