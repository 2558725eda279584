use crate::{
    ast::ExprTree,
    compiler::postfix::{ParseResult, PostfixExpr, PostfixToken},
    error::ParseError,
};

/// Builds a binary expression tree from a postfix expression.
///
/// Construction keeps a stack of subtrees. An operand pushes a fresh leaf:
/// alphabetic operands become [`ExprTree::Variable`] leaves, digits become
/// [`ExprTree::Literal`] leaves. An operator pops its two operands — the
/// first pop is the *right* child, since it sits closer to the operator in
/// postfix order — and pushes the combined node. A well-formed expression
/// leaves exactly the root on the stack.
///
/// # Errors
/// - [`ParseError::MissingOperands`] if an operator finds fewer than two
///   subtrees on the stack (e.g. the postfix sequence `a +`).
/// - [`ParseError::EmptyExpression`] if there are no tokens at all.
/// - [`ParseError::DanglingOperands`] if more than one subtree remains at the
///   end (e.g. `a b`, which no operator ever connects).
///
/// No partial tree escapes any of these cases; the caller gets an error and
/// must stop the pipeline.
///
/// # Example
/// ```
/// use arbora::compiler::{postfix::to_postfix, tree::build_tree};
///
/// let postfix = to_postfix("a + b").unwrap();
/// let root = build_tree(&postfix).unwrap();
/// assert_eq!(root.label(), "+");
/// ```
pub fn build_tree(postfix: &PostfixExpr) -> ParseResult<ExprTree> {
    let mut stack: Vec<ExprTree> = Vec::new();

    for token in &postfix.tokens {
        match token {
            PostfixToken::Operand(c) if c.is_ascii_alphabetic() => {
                stack.push(ExprTree::Variable { name: *c });
            },
            PostfixToken::Operand(c) => {
                stack.push(ExprTree::Literal { text: c.to_string() });
            },
            PostfixToken::Operator(op) => {
                let right = stack.pop();
                let left = stack.pop();

                match (left, right) {
                    (Some(left), Some(right)) => {
                        stack.push(ExprTree::BinaryOp { op:    *op,
                                                        left:  Box::new(left),
                                                        right: Box::new(right), });
                    },
                    _ => return Err(ParseError::MissingOperands { operator: op.symbol() }),
                }
            },
        }
    }

    let root = stack.pop().ok_or(ParseError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(ParseError::DanglingOperands { count: stack.len() + 1 });
    }

    Ok(root)
}
