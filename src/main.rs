use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use arbora::{
    compiler::{
        bindings::{EvalResult, ValueSource, collect_bindings},
        evaluator::evaluate,
        postfix::to_postfix,
        subst::substitute,
        tree::build_tree,
    },
    error::RuntimeError,
    render::write_dot_file,
};
use clap::Parser;

/// arbora compiles an arithmetic infix expression into a binary expression
/// tree, evaluates it, and writes the tree as Graphviz DOT files.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The infix expression to compile. When omitted, arbora prompts for one
    /// on standard input.
    expression: Option<String>,

    /// Path of the DOT file for the raw expression tree.
    #[arg(long, default_value = "tree.dot")]
    tree_file: PathBuf,

    /// Path of the DOT file for the tree with variables substituted by their
    /// values.
    #[arg(long, default_value = "tree_values.dot")]
    values_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = match &args.expression {
        Some(expression) => expression.clone(),
        None => prompt_line("Enter an arithmetic expression: ")?,
    };

    let postfix = to_postfix(&source)?;
    println!("Postfix form: {postfix}");

    let tree = build_tree(&postfix)?;

    write_dot_file(&tree, &args.tree_file)?;
    announce_dot_file(&args.tree_file);

    let bindings = collect_bindings(&tree, &mut ConsolePrompt)?;

    let result = evaluate(&tree, &bindings)?;
    println!("\nResult: {result}");

    let substituted = substitute(&tree, &bindings)?;
    write_dot_file(&substituted, &args.values_file)?;
    announce_dot_file(&args.values_file);

    Ok(())
}

/// Prints the confirmation and the `dot` invocation that turns the file into
/// an image.
fn announce_dot_file(path: &Path) {
    println!("Wrote '{}'. Render it with: dot -Tpng {} -o {}.png",
             path.display(),
             path.display(),
             path.with_extension("").display());
}

/// Prints a prompt and reads one line from standard input.
fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// The interactive value source: asks on the console for each variable.
struct ConsolePrompt;

impl ValueSource for ConsolePrompt {
    fn value_of(&mut self, name: char) -> EvalResult<f64> {
        let line =
            prompt_line(&format!("Enter the value of {name}: ")).map_err(|e| {
                RuntimeError::InputFailed { details: e.to_string() }
            })?;

        let input = line.trim();
        input.parse()
             .map_err(|_| RuntimeError::InvalidValueInput { name,
                                                            input: input.to_string(), })
    }
}
