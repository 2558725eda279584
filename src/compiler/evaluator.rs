use crate::{
    ast::ExprTree,
    compiler::bindings::{Bindings, EvalResult},
    error::RuntimeError,
};

/// Evaluates an expression tree against a set of variable bindings.
///
/// The walk is post-order: both subtrees of an operator node are evaluated
/// first, then the operator combines the two results. Variable leaves resolve
/// through `bindings`; literal leaves parse their text as an `f64`.
///
/// Arithmetic never fails: division by zero and out-of-domain powers follow
/// IEEE-754 and yield infinities or NaN (see [`crate::ast::Operator::apply`]).
///
/// # Errors
/// - [`RuntimeError::UnboundVariable`] for a variable with no binding. The
///   normal pipeline collects bindings first, so this only fires when that
///   contract is broken — it is never silently defaulted.
/// - [`RuntimeError::MalformedLiteral`] for a literal that does not parse.
///
/// # Example
/// ```
/// use arbora::compiler::{bindings::Bindings, evaluator::evaluate};
///
/// let tree = arbora::compile("a + b * c").unwrap();
/// let bindings = Bindings::from([('a', 2.0), ('b', 3.0), ('c', 4.0)]);
///
/// assert_eq!(evaluate(&tree, &bindings).unwrap(), 14.0);
/// ```
pub fn evaluate(tree: &ExprTree, bindings: &Bindings) -> EvalResult<f64> {
    match tree {
        ExprTree::Variable { name } => {
            bindings.get(name).copied()
                    .ok_or(RuntimeError::UnboundVariable { name: *name })
        },
        ExprTree::Literal { text } => {
            text.parse()
                .map_err(|_| RuntimeError::MalformedLiteral { text: text.clone() })
        },
        ExprTree::BinaryOp { op, left, right } => {
            let left = evaluate(left, bindings)?;
            let right = evaluate(right, bindings)?;
            Ok(op.apply(left, right))
        },
    }
}
