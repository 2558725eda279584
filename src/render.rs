use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::ast::ExprTree;

/// Writes an expression tree as a Graphviz DOT document.
///
/// Every node gets one statement with a stable identifier (`n0`, `n1`, … in
/// pre-order) and its [`ExprTree::label`] as the displayed text, and every
/// parent→child link gets one edge statement. A parent's edges are written
/// before the child subtrees they point into, so the document reads top-down.
///
/// The renderer only walks the public tree structure; nothing in the core
/// pipeline knows about the DOT format.
///
/// # Errors
/// Forwards any failure of the underlying writer.
///
/// # Example
/// ```
/// use arbora::render::write_dot;
///
/// let tree = arbora::compile("a + b").unwrap();
/// let mut out = Vec::new();
///
/// write_dot(&mut out, &tree).unwrap();
/// let dot = String::from_utf8(out).unwrap();
/// assert!(dot.starts_with("digraph ExpressionTree {"));
/// assert!(dot.contains("n0 -> n1;"));
/// ```
pub fn write_dot<W: Write>(out: &mut W, tree: &ExprTree) -> io::Result<()> {
    writeln!(out, "digraph ExpressionTree {{")?;
    writeln!(out, "  node [shape=circle, style=filled, fillcolor=white];")?;
    writeln!(out, "  rankdir=TB;")?;
    writeln!(out)?;

    write_node(out, tree, &mut 0)?;

    writeln!(out, "}}")
}

/// Writes one node statement, then the edges and subtrees beneath it.
///
/// `next_id` numbers nodes in pre-order; a child's identifier is whatever
/// `next_id` holds just before its subtree is written.
fn write_node<W: Write>(out: &mut W, tree: &ExprTree, next_id: &mut usize) -> io::Result<()> {
    let id = *next_id;
    *next_id += 1;

    writeln!(out, "  n{id} [label=\"{}\"];", tree.label())?;

    if let ExprTree::BinaryOp { left, right, .. } = tree {
        writeln!(out, "  n{id} -> n{};", *next_id)?;
        write_node(out, left, next_id)?;

        writeln!(out, "  n{id} -> n{};", *next_id)?;
        write_node(out, right, next_id)?;
    }

    Ok(())
}

/// Writes an expression tree as a DOT file at `path`.
///
/// # Errors
/// Forwards any failure while creating or writing the file.
pub fn write_dot_file(tree: &ExprTree, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_dot(&mut out, tree)?;
    out.flush()
}
