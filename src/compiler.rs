/// The bindings module collects values for the variables in a tree.
///
/// A traversal visits every variable leaf and requests a numeric value for
/// each distinct name exactly once from an injected [`bindings::ValueSource`].
/// The completed mapping feeds evaluation and substitution.
pub mod bindings;
/// The evaluator module computes the numeric result of an expression tree.
///
/// Evaluation is a recursive post-order walk: leaves resolve to bound values
/// or parsed literals, operator nodes combine the results of their subtrees.
pub mod evaluator;
/// The lexer module tokenizes an infix expression.
///
/// The lexer reads the raw expression text and produces single-character
/// tokens: operands, operators, and parentheses. Whitespace is skipped.
/// Operands are strictly one character wide, so a run like `ab` becomes two
/// variable tokens.
pub mod lexer;
/// The postfix module converts infix token streams to postfix form.
///
/// The conversion is the classic shunting-yard algorithm: operands are
/// emitted as they appear, operators wait on a stack until an operator of
/// lower precedence (or a parenthesis boundary) flushes them out.
pub mod postfix;
/// The subst module replaces variables with their bound values.
///
/// Substitution builds a brand-new tree in which every variable leaf becomes
/// a numeric literal leaf. The source tree is never touched, so the "before"
/// and "after" trees can be rendered independently.
pub mod subst;
/// The tree module builds an expression tree from postfix tokens.
///
/// Construction is stack-based: operands push leaves, operators pop their two
/// operand subtrees and push the combined node. Malformed postfix input is
/// detected here and reported instead of producing a broken tree.
pub mod tree;
