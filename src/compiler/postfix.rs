use crate::{
    ast::Operator,
    compiler::lexer::{Token, tokenize},
    error::ParseError,
};

/// Result type used by the postfix converter and the tree builder.
pub type ParseResult<T> = Result<T, ParseError>;

/// A single token of a postfix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixToken {
    /// An operand: a variable letter or a digit.
    Operand(char),
    /// A binary operator.
    Operator(Operator),
}

impl std::fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(c) => write!(f, "{c}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An expression in postfix (reverse Polish) form.
///
/// Displays as its tokens separated by single spaces, e.g. `a b c * +`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostfixExpr {
    /// The tokens in emission order.
    pub tokens: Vec<PostfixToken>,
}

impl std::fmt::Display for PostfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// An entry on the shunting-yard operator stack.
enum StackEntry {
    /// A waiting operator.
    Operator(Operator),
    /// The boundary left behind by an opening parenthesis.
    LParen {
        /// The byte column of the `(`, for error reporting.
        column: usize,
    },
}

/// Converts an infix expression to postfix form.
///
/// This is the shunting-yard algorithm. Operands are emitted the moment they
/// are read. An operator first flushes every stacked operator whose
/// precedence is greater than *or equal to* its own, then waits on the stack
/// itself. A `(` pushes a boundary no flush crosses; a `)` flushes up to that
/// boundary and discards it. Whatever remains on the stack is emitted once
/// the input ends.
///
/// The `>=` comparison makes every operator group left to right, **including
/// `^`**: `a ^ b ^ c` converts as `(a ^ b) ^ c`. Conventional mathematical
/// notation groups exponentiation to the right; this converter intentionally
/// does not.
///
/// # Errors
/// - [`ParseError::UnexpectedCharacter`] from the lexer.
/// - [`ParseError::EmptyExpression`] if the input holds no tokens.
/// - [`ParseError::UnmatchedCloseParen`] for a `)` with no open `(`.
/// - [`ParseError::UnmatchedOpenParen`] for a `(` that is never closed.
///
/// # Example
/// ```
/// use arbora::compiler::postfix::to_postfix;
///
/// let postfix = to_postfix("a + b * c").unwrap();
/// assert_eq!(postfix.to_string(), "a b c * +");
///
/// let grouped = to_postfix("(a + b) * c").unwrap();
/// assert_eq!(grouped.to_string(), "a b + c *");
/// ```
pub fn to_postfix(source: &str) -> ParseResult<PostfixExpr> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for (token, column) in tokens {
        match token {
            Token::Variable(c) | Token::Digit(c) => output.push(PostfixToken::Operand(c)),

            Token::LParen => stack.push(StackEntry::LParen { column }),

            Token::RParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op)) => output.push(PostfixToken::Operator(op)),
                    Some(StackEntry::LParen { .. }) => break,
                    None => return Err(ParseError::UnmatchedCloseParen { column }),
                }
            },

            _ => {
                let Some(op) = token_to_operator(token) else {
                    unreachable!("all non-operator tokens are handled above");
                };

                loop {
                    if let Some(StackEntry::Operator(top)) = stack.last()
                       && top.precedence() >= op.precedence()
                    {
                        output.push(PostfixToken::Operator(*top));
                        stack.pop();
                        continue;
                    }
                    break;
                }

                stack.push(StackEntry::Operator(op));
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(PostfixToken::Operator(op)),
            StackEntry::LParen { column } => {
                return Err(ParseError::UnmatchedOpenParen { column });
            },
        }
    }

    Ok(PostfixExpr { tokens: output })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for operands and parentheses.
///
/// # Example
/// ```
/// use arbora::{ast::Operator, compiler::{lexer::Token, postfix::token_to_operator}};
///
/// assert_eq!(token_to_operator(Token::Plus), Some(Operator::Add));
/// assert_eq!(token_to_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        Token::Caret => Some(Operator::Pow),
        _ => None,
    }
}
