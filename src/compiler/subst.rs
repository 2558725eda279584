use crate::{
    ast::ExprTree,
    compiler::bindings::{Bindings, EvalResult},
    error::RuntimeError,
};

/// Produces a copy of a tree with every variable replaced by its bound value.
///
/// The result is structurally identical to the input: operators and literal
/// leaves copy over unchanged, while each [`ExprTree::Variable`] leaf becomes
/// an [`ExprTree::Literal`] holding the textual rendering of its bound value.
/// The input tree is not modified, so the raw and the substituted tree can be
/// rendered side by side.
///
/// Evaluating the substituted tree needs no bindings at all and yields the
/// same result as evaluating the original against `bindings`.
///
/// # Errors
/// Returns [`RuntimeError::UnboundVariable`] if a variable has no binding;
/// like evaluation, substitution expects the collection step to have run.
///
/// # Example
/// ```
/// use arbora::compiler::{bindings::Bindings, evaluator::evaluate, subst::substitute};
///
/// let tree = arbora::compile("x * x").unwrap();
/// let bindings = Bindings::from([('x', 3.0)]);
///
/// let substituted = substitute(&tree, &bindings).unwrap();
/// assert_eq!(evaluate(&substituted, &Bindings::new()).unwrap(), 9.0);
/// ```
pub fn substitute(tree: &ExprTree, bindings: &Bindings) -> EvalResult<ExprTree> {
    match tree {
        ExprTree::Variable { name } => {
            let value = bindings.get(name)
                                .ok_or(RuntimeError::UnboundVariable { name: *name })?;
            Ok(ExprTree::Literal { text: value.to_string() })
        },
        ExprTree::Literal { text } => Ok(ExprTree::Literal { text: text.clone() }),
        ExprTree::BinaryOp { op, left, right } => {
            Ok(ExprTree::BinaryOp { op:    *op,
                                    left:  Box::new(substitute(left, bindings)?),
                                    right: Box::new(substitute(right, bindings)?), })
        },
    }
}
