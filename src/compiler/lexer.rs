use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token of an infix expression.
///
/// Every token is exactly one character of the source. Operands are
/// deliberately single characters: the language has no multi-character
/// identifiers or numbers, so `ab` lexes as two variable tokens and `12` as
/// two digit tokens.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A single-letter variable name, such as `x`.
    #[regex(r"[a-zA-Z]", first_char)]
    Variable(char),
    /// A single-digit numeric literal, `0` through `9`.
    #[regex(r"[0-9]", first_char)]
    Digit(char),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Extracts the character a one-character token slice consists of.
fn first_char(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// Tokenizes an infix expression.
///
/// Each token is paired with its byte column in the source, which later
/// stages use for error reporting.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for any character that is not
/// an operand, an operator, a parenthesis, or whitespace.
///
/// # Example
/// ```
/// use arbora::compiler::lexer::{Token, tokenize};
///
/// let tokens = tokenize("a + 1").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Variable('a'), 0), (Token::Plus, 2), (Token::Digit('1'), 4)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { found:  lexer.slice().to_string(),
                                                             column: lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}
