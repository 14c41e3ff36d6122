use super::*;
use pretty_assertions::assert_eq;

fn kind(word: &str) -> TokenKind<'_> {
    cook(word).kind
}

#[test]
fn test_operators() {
    assert_eq!(kind("+"), TokenKind::Operator(Operator::Add));
    assert_eq!(kind("-"), TokenKind::Operator(Operator::Sub));
    assert_eq!(kind("*"), TokenKind::Operator(Operator::Mul));
    assert_eq!(kind("/"), TokenKind::Operator(Operator::Div));
    assert_eq!(kind("^"), TokenKind::Operator(Operator::Pow));
}

#[test]
fn test_cond_op() {
    assert_eq!(kind("?:"), TokenKind::CondOp);
    assert_eq!(kind("?"), TokenKind::Variable("?"));
}

#[test]
fn test_numbers() {
    assert_eq!(kind("3"), TokenKind::Number(3.0));
    assert_eq!(kind("3.25"), TokenKind::Number(3.25));
    assert_eq!(kind(".5"), TokenKind::Number(0.5));
    assert_eq!(kind("-2"), TokenKind::Number(-2.0));
    assert_eq!(kind("+2"), TokenKind::Number(2.0));
    assert_eq!(kind("1e3"), TokenKind::Number(1000.0));
    assert_eq!(kind("6.02E-1"), TokenKind::Number(0.602));
}

#[test]
fn test_non_finite_numbers() {
    assert_eq!(kind("inf"), TokenKind::Number(f64::INFINITY));
    assert_eq!(kind("-inf"), TokenKind::Number(f64::NEG_INFINITY));
    assert!(matches!(kind("NaN"), TokenKind::Number(value) if value.is_nan()));
}

#[test]
fn test_number_like_names_are_variables() {
    assert_eq!(kind("infinity"), TokenKind::Variable("infinity"));
    assert_eq!(kind("nan"), TokenKind::Variable("nan"));
    assert_eq!(kind("+inf"), TokenKind::Variable("+inf"));
    assert_eq!(kind("3x"), TokenKind::Variable("3x"));
    assert_eq!(kind("-x"), TokenKind::Variable("-x"));
    assert_eq!(kind("1.2.3"), TokenKind::Variable("1.2.3"));
}

#[test]
fn test_functions() {
    assert_eq!(kind("sqrt()"), TokenKind::Function("sqrt"));
    assert_eq!(kind("()"), TokenKind::Function(""));
    assert_eq!(kind("f(x)"), TokenKind::Variable("f(x)"));
}

#[test]
fn test_text_is_preserved() {
    let token = cook("sqrt()");
    assert_eq!(token.text, "sqrt()");
}
