/// Parsing errors.
///
/// Defines all error types that can occur while lexing an infix expression,
/// converting it to postfix form, or building the expression tree. Parse
/// errors always stop the pipeline before any evaluation happens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while collecting variable
/// values, evaluating a tree, or substituting values into one.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
