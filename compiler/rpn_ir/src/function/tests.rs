#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_empty_name_rejected() {
    let result = UnaryFunction::new("", |x| x);
    assert_eq!(result.err(), Some(InvalidArgument::EmptyFunctionName));
}

#[test]
fn test_apply_custom_function() {
    let double = UnaryFunction::new("double", |x| 2.0 * x).unwrap();
    assert_eq!(double.name(), "double");
    assert_eq!(double.apply(21.0), 42.0);
}

#[test]
fn test_equality_by_name() {
    let a = UnaryFunction::new("f", |x| x + 1.0).unwrap();
    let b = UnaryFunction::new("f", |x| x - 1.0).unwrap();
    let c = UnaryFunction::new("g", |x| x + 1.0).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_builtins() {
    let table = FunctionTable::builtins();
    assert_eq!(
        table.names(),
        vec!["abs", "ceil", "cos", "exp", "floor", "log", "round", "sin", "sqrt", "tan"]
    );
    assert_eq!(table.get("sqrt").unwrap().apply(16.0), 4.0);
    assert_eq!(table.get("abs").unwrap().apply(-2.5), 2.5);
    assert_eq!(table.get("log").unwrap().apply(1.0), 0.0);
    assert!(table.get("sqrt()").is_none());
}

#[test]
fn test_insert_replaces() {
    let mut table = FunctionTable::new();
    assert!(table.is_empty());
    table.insert(UnaryFunction::new("f", |x| x).unwrap());
    let previous = table.insert(UnaryFunction::new("f", |x| -x).unwrap());
    assert!(previous.is_some());
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("f").unwrap().apply(3.0), -3.0);
}

#[test]
fn test_debug_shows_call_syntax() {
    let table = FunctionTable::builtins();
    assert_eq!(format!("{:?}", table.get("cos").unwrap()), "cos()");
}
