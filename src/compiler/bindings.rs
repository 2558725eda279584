use std::collections::HashMap;

use crate::{ast::ExprTree, error::RuntimeError};

/// Result type used by the evaluator, the substituter, and the binding
/// collector.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A mapping from single-letter variable names to their numeric values.
pub type Bindings = HashMap<char, f64>;

/// A source of numeric values for variables.
///
/// The binding collector asks a `ValueSource` for the value of each distinct
/// variable it encounters. The CLI implements this with a console prompt;
/// tests and library callers supply a deterministic source instead, which
/// keeps the core pipeline free of any real I/O.
pub trait ValueSource {
    /// Produces the value to bind to `name`.
    ///
    /// # Errors
    /// Whatever failure the source hits — malformed input, a closed stream —
    /// is returned as a [`RuntimeError`] and propagates unchanged. There is
    /// no retry.
    fn value_of(&mut self, name: char) -> EvalResult<f64>;
}

/// A completed mapping is itself a value source: requests resolve by lookup.
///
/// This is the deterministic source used in tests and by callers that
/// already know every value up front.
impl ValueSource for Bindings {
    fn value_of(&mut self, name: char) -> EvalResult<f64> {
        self.get(&name).copied()
            .ok_or(RuntimeError::UnboundVariable { name })
    }
}

/// Collects a value for every distinct variable in a tree.
///
/// The tree is walked depth-first, left subtree before right; the walk order
/// only decides the order in which values are requested. Each distinct
/// variable name is requested from `source` exactly once, no matter how many
/// leaves repeat it.
///
/// # Errors
/// A failed request aborts the collection and propagates as is.
///
/// # Example
/// ```
/// use arbora::compiler::bindings::{Bindings, collect_bindings};
///
/// let tree = arbora::compile("x + x * y").unwrap();
/// let mut known = Bindings::from([('x', 2.0), ('y', 5.0)]);
///
/// let bindings = collect_bindings(&tree, &mut known).unwrap();
/// assert_eq!(bindings.len(), 2);
/// ```
pub fn collect_bindings<S: ValueSource>(tree: &ExprTree, source: &mut S) -> EvalResult<Bindings> {
    let mut bindings = Bindings::new();
    collect_into(tree, source, &mut bindings)?;
    Ok(bindings)
}

fn collect_into<S: ValueSource>(tree: &ExprTree,
                                source: &mut S,
                                bindings: &mut Bindings)
                                -> EvalResult<()> {
    match tree {
        ExprTree::Variable { name } => {
            if !bindings.contains_key(name) {
                let value = source.value_of(*name)?;
                bindings.insert(*name, value);
            }
            Ok(())
        },
        ExprTree::Literal { .. } => Ok(()),
        ExprTree::BinaryOp { left, right, .. } => {
            collect_into(left, source, bindings)?;
            collect_into(right, source, bindings)
        },
    }
}
