//! Inputs nested far deeper than a thread's stack would allow without
//! growing it.

use tally::{
    ast::{Expr, Render, UnaryOperator},
    error::{Diagnostic, Diagnostics, ParseError},
    evaluate_source,
    interpreter::{
        evaluator::Evaluator,
        lexer::{Token, TokenKind},
    },
};

const DEPTH: usize = 100_000;

fn chain(operator: &str, terms: usize) -> String {
    vec!["1"; terms].join(operator)
}

#[test]
fn deeply_nested_parentheses() {
    let source = format!("{}1{}", "(".repeat(DEPTH), ")".repeat(DEPTH));
    let evaluation = evaluate_source(&source);

    assert!(evaluation.is_clean(), "{}", evaluation.diagnostics);
    assert_eq!(evaluation.as_signed(), 1);

    let source = format!("{}4 + 3) * 8{}", "(".repeat(DEPTH), ")".repeat(DEPTH - 1));
    assert_eq!(evaluate_source(&source).as_signed(), 56);
}

#[test]
fn deeply_unclosed_parentheses_recover() {
    let source = format!("{}1", "(".repeat(DEPTH));
    let evaluation = evaluate_source(&source);

    assert_eq!(evaluation.as_signed(), 0);
    assert_eq!(evaluation.diagnostics.len(), DEPTH);
    assert!(evaluation.diagnostics
                      .iter()
                      .all(|d| matches!(d, Diagnostic::Parse(ParseError::ExpectedClosingParen { .. }))));
}

#[test]
fn long_flat_chains() {
    let evaluation = evaluate_source(&chain(" + ", DEPTH));
    assert!(evaluation.is_clean(), "{}", evaluation.diagnostics);
    assert_eq!(evaluation.as_signed(), 100_000);

    assert_eq!(evaluate_source(&chain("*", DEPTH)).as_signed(), 1);

    // Pairs of terms cancel and every nesting level flips the sign of the
    // rest: (1 - 1) - ((1 - 1) - (...)).
    assert_eq!(evaluate_source(&chain(" - ", DEPTH)).as_signed(), 0);
    assert_eq!(evaluate_source(&chain(" - ", DEPTH + 1)).as_signed(), 1);
    assert_eq!(evaluate_source(&chain(" - ", DEPTH + 3)).as_signed(), -1);
}

#[test]
fn deep_unary_tree_evaluates_renders_and_drops() {
    let mut tree = Expr::literal(Token::new("5", TokenKind::Integer, 0));
    for _ in 0..DEPTH * 2 {
        tree = Expr::unary(UnaryOperator::Negate, tree);
    }

    let mut diagnostics = Diagnostics::new();
    assert_eq!(Evaluator::new(&mut diagnostics).eval(tree.as_deref()), 5);
    assert!(diagnostics.is_empty());

    let rendered = Render(tree.as_deref()).to_string();
    assert!(rendered.starts_with("(neg (neg (neg"));
    assert!(rendered.ends_with("5))"));

    drop(tree);
}
