use super::*;
use pretty_assertions::assert_eq;
use rpn_ir::{Operator, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind<'_>> {
    tokenize(source).map(|token| token.kind).collect()
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![]);
    assert_eq!(kinds(" \t\n "), vec![]);
}

#[test]
fn test_mixed_stream() {
    assert_eq!(
        kinds("x 3.0 + 2 y * sqrt() ?:"),
        vec![
            TokenKind::Variable("x"),
            TokenKind::Number(3.0),
            TokenKind::Operator(Operator::Add),
            TokenKind::Number(2.0),
            TokenKind::Variable("y"),
            TokenKind::Operator(Operator::Mul),
            TokenKind::Function("sqrt"),
            TokenKind::CondOp,
        ]
    );
}

#[test]
fn test_any_whitespace_separates() {
    assert_eq!(
        kinds("1\t2\r\n+"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Number(2.0),
            TokenKind::Operator(Operator::Add),
        ]
    );
}

#[test]
fn test_vertical_tab_and_form_feed_separate() {
    assert_eq!(
        kinds("3\x0B4\x0C+"),
        vec![
            TokenKind::Number(3.0),
            TokenKind::Number(4.0),
            TokenKind::Operator(Operator::Add),
        ]
    );
}

#[test]
fn test_no_whitespace_means_one_word() {
    assert_eq!(kinds("3+4"), vec![TokenKind::Variable("3+4")]);
}

#[test]
fn test_raw_text() {
    let texts: Vec<&str> = tokenize("  1e2   abs()  ").map(|t| t.text).collect();
    assert_eq!(texts, vec!["1e2", "abs()"]);
}

#[test]
fn test_lazy() {
    let mut tokens = tokenize("a b c");
    assert_eq!(tokens.next().map(|t| t.text), Some("a"));
    assert_eq!(tokens.next().map(|t| t.text), Some("b"));
}
