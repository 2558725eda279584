//! # arbora
//!
//! arbora compiles arithmetic infix expressions into binary expression trees.
//! It converts the expression to postfix form with the shunting-yard
//! algorithm, builds the tree, evaluates it against variable bindings, and
//! renders trees as Graphviz DOT documents.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{ast::ExprTree, compiler::{postfix::to_postfix, tree::build_tree}, error::ParseError};

/// Defines the expression data model.
///
/// This module declares the [`ast::Operator`] and [`ast::ExprTree`] types:
/// the operators the language supports and the binary tree the compiler
/// produces. Leaves are operands, internal nodes are operators with exactly
/// two children.
///
/// # Responsibilities
/// - Defines operator precedence, symbols, and arithmetic.
/// - Defines the owned tree structure every later stage consumes.
/// - Exposes node labels so renderers stay decoupled from node internals.
pub mod ast;
/// Orchestrates the expression compilation pipeline.
///
/// This module ties together the lexer, the infix-to-postfix converter, the
/// tree builder, the evaluator, the substituter, and the variable binding
/// collector.
///
/// # Responsibilities
/// - Converts raw infix text to postfix form and on into a tree.
/// - Evaluates trees and substitutes bound values into them.
/// - Collects one value per distinct variable from an injected source.
pub mod compiler;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while compiling or
/// evaluating an expression, split into [`error::ParseError`] (everything up
/// to and including tree construction) and [`error::RuntimeError`]
/// (evaluation, substitution, and value input).
///
/// # Responsibilities
/// - Defines error enums for all failure modes, with positions where known.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Renders expression trees as Graphviz DOT documents.
pub mod render;

/// Compiles an infix expression into a binary expression tree.
///
/// This is the convenience entry point covering the first two pipeline
/// stages: infix-to-postfix conversion followed by tree construction. Callers
/// that want the intermediate postfix form run the stages themselves via
/// [`compiler::postfix::to_postfix`] and [`compiler::tree::build_tree`].
///
/// # Errors
/// Returns a [`ParseError`] if the expression cannot be lexed, converted, or
/// built into a single well-formed tree. No partial tree is ever produced.
///
/// # Examples
/// ```
/// let tree = arbora::compile("(a + b) * c").unwrap();
/// assert_eq!(tree.label(), "*");
///
/// // A lone operand before an operator that needs two is rejected.
/// assert!(arbora::compile("a +").is_err());
/// ```
pub fn compile(source: &str) -> Result<ExprTree, ParseError> {
    let postfix = to_postfix(source)?;
    build_tree(&postfix)
}
