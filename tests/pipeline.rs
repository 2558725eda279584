use arbora::{
    ast::ExprTree,
    compiler::{
        bindings::{Bindings, EvalResult, ValueSource, collect_bindings},
        evaluator::evaluate,
        postfix::{PostfixExpr, PostfixToken, to_postfix},
        subst::substitute,
        tree::build_tree,
    },
    error::{ParseError, RuntimeError},
    render::write_dot,
};

fn postfix_of(source: &str) -> String {
    to_postfix(source).unwrap_or_else(|e| panic!("'{source}' failed to convert: {e}"))
                      .to_string()
}

fn eval_with(source: &str, values: &[(char, f64)]) -> f64 {
    let tree =
        arbora::compile(source).unwrap_or_else(|e| panic!("'{source}' failed to compile: {e}"));
    let bindings: Bindings = values.iter().copied().collect();

    evaluate(&tree, &bindings).unwrap_or_else(|e| panic!("'{source}' failed to evaluate: {e}"))
}

#[test]
fn postfix_conversion_respects_precedence() {
    assert_eq!(postfix_of("a+b*c"), "a b c * +");
    assert_eq!(postfix_of("a*b+c"), "a b * c +");
    assert_eq!(postfix_of("a+b/c-d"), "a b c / + d -");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(postfix_of("(a+b)*c"), "a b + c *");
    assert_eq!(postfix_of("a*(b+c)"), "a b c + *");
    assert_eq!(postfix_of("((a))"), "a");
}

#[test]
fn equal_precedence_groups_left_to_right() {
    assert_eq!(postfix_of("a-b-c"), "a b - c -");
    assert_eq!(postfix_of("a/b/c"), "a b / c /");
    // Exponentiation too: this converter groups `a^b^c` as `(a^b)^c`, not
    // the right-grouped reading mathematical notation uses.
    assert_eq!(postfix_of("a^b^c"), "a b ^ c ^");
}

#[test]
fn whitespace_is_skipped_and_operands_are_single_characters() {
    assert_eq!(postfix_of("  a +\tb "), "a b +");
    // There are no multi-character operands: a run lexes one char at a time.
    assert_eq!(postfix_of("ab"), "a b");
    assert_eq!(postfix_of("12"), "1 2");
}

#[test]
fn evaluation_matches_expected_arithmetic() {
    assert_eq!(eval_with("a+b*c", &[('a', 2.0), ('b', 3.0), ('c', 4.0)]), 14.0);
    assert_eq!(eval_with("(a+b)*c", &[('a', 2.0), ('b', 3.0), ('c', 4.0)]), 20.0);
    assert_eq!(eval_with("2+3*4", &[]), 14.0);
    assert_eq!(eval_with("x^2", &[('x', 5.0)]), 25.0);
}

#[test]
fn left_associativity_shapes_results() {
    // (10 - 3) - 2, not 10 - (3 - 2).
    assert_eq!(eval_with("a-b-c", &[('a', 10.0), ('b', 3.0), ('c', 2.0)]), 5.0);
    // (2 ^ 2) ^ 3 = 64; right-grouped exponentiation would give 2 ^ 8 = 256.
    assert_eq!(eval_with("a^b^c", &[('a', 2.0), ('b', 2.0), ('c', 3.0)]), 64.0);
}

#[test]
fn division_by_zero_yields_an_infinity() {
    assert!(eval_with("a/b", &[('a', 1.0), ('b', 0.0)]).is_infinite());
    assert!(eval_with("0/0", &[]).is_nan());
}

#[test]
fn operator_without_enough_operands_is_rejected() {
    assert_eq!(arbora::compile("a+"),
               Err(ParseError::MissingOperands { operator: '+' }));
    assert_eq!(arbora::compile("*a"),
               Err(ParseError::MissingOperands { operator: '*' }));
}

#[test]
fn disconnected_operands_are_rejected() {
    let postfix = PostfixExpr { tokens: vec![PostfixToken::Operand('a'),
                                             PostfixToken::Operand('b')], };

    assert_eq!(build_tree(&postfix), Err(ParseError::DanglingOperands { count: 2 }));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(arbora::compile(""), Err(ParseError::EmptyExpression));
    assert_eq!(arbora::compile("   \t "), Err(ParseError::EmptyExpression));
}

#[test]
fn unmatched_parentheses_are_rejected() {
    assert_eq!(arbora::compile("(a+b"),
               Err(ParseError::UnmatchedOpenParen { column: 0 }));
    assert_eq!(arbora::compile("a+b)"),
               Err(ParseError::UnmatchedCloseParen { column: 3 }));
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(arbora::compile("a$b"),
               Err(ParseError::UnexpectedCharacter { found:  "$".to_string(),
                                                     column: 1, }));
}

#[test]
fn unbound_variable_is_an_error_not_a_default() {
    let tree = arbora::compile("a+b").unwrap();
    let bindings = Bindings::from([('a', 1.0)]);

    assert_eq!(evaluate(&tree, &bindings),
               Err(RuntimeError::UnboundVariable { name: 'b' }));
}

/// A value source that remembers every request it receives.
struct RecordingSource {
    values:    Bindings,
    requested: Vec<char>,
}

impl ValueSource for RecordingSource {
    fn value_of(&mut self, name: char) -> EvalResult<f64> {
        self.requested.push(name);
        self.values.value_of(name)
    }
}

#[test]
fn each_variable_is_requested_exactly_once() {
    let tree = arbora::compile("a+a*a").unwrap();
    let mut source = RecordingSource { values:    Bindings::from([('a', 2.0)]),
                                       requested: Vec::new(), };

    let bindings = collect_bindings(&tree, &mut source).unwrap();

    assert_eq!(source.requested, vec!['a']);
    assert_eq!(bindings, Bindings::from([('a', 2.0)]));
}

#[test]
fn variables_are_requested_in_traversal_order() {
    let tree = arbora::compile("b*a+b").unwrap();
    let mut source = RecordingSource { values:    Bindings::from([('a', 1.0), ('b', 2.0)]),
                                       requested: Vec::new(), };

    collect_bindings(&tree, &mut source).unwrap();

    assert_eq!(source.requested, vec!['b', 'a']);
}

#[test]
fn failed_value_request_propagates() {
    let tree = arbora::compile("a+b").unwrap();
    let mut source = RecordingSource { values:    Bindings::from([('a', 1.0)]),
                                       requested: Vec::new(), };

    assert_eq!(collect_bindings(&tree, &mut source),
               Err(RuntimeError::UnboundVariable { name: 'b' }));
}

#[test]
fn substitution_preserves_structure_and_result() {
    let bindings = Bindings::from([('x', 2.0), ('y', 3.0), ('z', 4.0)]);
    let tree = arbora::compile("x^y/z+5").unwrap();

    let substituted = substitute(&tree, &bindings).unwrap();

    // The substituted tree evaluates without any bindings at all.
    assert_eq!(evaluate(&substituted, &Bindings::new()).unwrap(),
               evaluate(&tree, &bindings).unwrap());

    // Same shape, but no variable leaves are left anywhere.
    fn has_variables(tree: &ExprTree) -> bool {
        match tree {
            ExprTree::Variable { .. } => true,
            ExprTree::Literal { .. } => false,
            ExprTree::BinaryOp { left, right, .. } => has_variables(left) || has_variables(right),
        }
    }
    assert!(has_variables(&tree));
    assert!(!has_variables(&substituted));
}

#[test]
fn substituted_leaves_carry_the_value_text() {
    let tree = arbora::compile("x").unwrap();
    let substituted = substitute(&tree, &Bindings::from([('x', 2.5)])).unwrap();

    assert!(substituted.is_leaf());
    assert_eq!(substituted, ExprTree::Literal { text: "2.5".to_string() });
}

#[test]
fn dot_output_lists_every_node_and_edge() {
    let tree = arbora::compile("a+b*c").unwrap();
    let mut out = Vec::new();

    write_dot(&mut out, &tree).unwrap();
    let dot = String::from_utf8(out).unwrap();

    assert!(dot.starts_with("digraph ExpressionTree {"));
    assert!(dot.ends_with("}\n"));

    // Pre-order identifiers: + a * b c.
    assert!(dot.contains("n0 [label=\"+\"];"));
    assert!(dot.contains("n1 [label=\"a\"];"));
    assert!(dot.contains("n2 [label=\"*\"];"));
    assert!(dot.contains("n3 [label=\"b\"];"));
    assert!(dot.contains("n4 [label=\"c\"];"));

    assert!(dot.contains("n0 -> n1;"));
    assert!(dot.contains("n0 -> n2;"));
    assert!(dot.contains("n2 -> n3;"));
    assert!(dot.contains("n2 -> n4;"));

    // One node statement per tree node, one edge per parent->child link.
    assert_eq!(dot.matches("[label=").count(), 5);
    assert_eq!(dot.matches("->").count(), 4);
}
