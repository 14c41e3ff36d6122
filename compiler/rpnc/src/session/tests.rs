#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn run(session: &mut Session, line: &str) -> String {
    session.execute(line).unwrap()
}

#[test]
fn test_command_parsing() {
    assert_eq!(Command::parse("   ").unwrap(), None);
    assert_eq!(
        Command::parse("set x 2.5").unwrap(),
        Some(Command::Set {
            name: "x",
            value: 2.5
        })
    );
    assert_eq!(Command::parse("unset  x ").unwrap(), Some(Command::Unset("x")));
    assert_eq!(
        Command::parse("eval   3 4 +  ").unwrap(),
        Some(Command::Eval("3 4 +"))
    );
    assert_eq!(Command::parse("vars").unwrap(), Some(Command::Vars));
}

#[test]
fn test_command_usage_errors() {
    assert!(matches!(
        Command::parse("set x"),
        Err(CommandError::Usage("set <name> <value>"))
    ));
    assert!(matches!(
        Command::parse("set x 1 2"),
        Err(CommandError::Usage(_))
    ));
    assert!(matches!(
        Command::parse("unset"),
        Err(CommandError::Usage("unset <name>"))
    ));
    assert!(matches!(
        Command::parse("vars x"),
        Err(CommandError::Usage("vars"))
    ));
    assert!(matches!(
        Command::parse("set x abc"),
        Err(CommandError::InvalidNumber(value)) if value == "abc"
    ));
    assert!(matches!(
        Command::parse("frobnicate 1"),
        Err(CommandError::UnknownCommand(word)) if word == "frobnicate"
    ));
}

#[test]
fn test_eval_with_bindings() {
    let mut session = Session::new();
    assert!(matches!(
        session.execute("eval x 1 +"),
        Err(CommandError::Eval(_))
    ));
    assert_eq!(run(&mut session, "set x 41"), "x = 41.0");
    assert_eq!(run(&mut session, "eval x 1 +"), "42.0");
}

#[test]
fn test_renderings() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, "infix x 2 ^ sqrt()"), "sqrt((x ^ 2.0))");
    assert_eq!(run(&mut session, "postfix x 2 ^ sqrt()"), "x 2.0 ^ sqrt()");
    assert_eq!(run(&mut session, "opcount c 1 2 + 3 ?:"), "2");
}

#[test]
fn test_optimize_uses_bindings() {
    let mut session = Session::new();
    run(&mut session, "set y 2");
    assert_eq!(run(&mut session, "optimize x y 3 * +"), "(x + 6.0)");
    assert_eq!(run(&mut session, "optimize y 2 - a b ?:"), "b");
}

#[test]
fn test_deps_sorted() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, "deps 1 2 +"), "");
    assert_eq!(run(&mut session, "deps z a + z * m b ?:"), "a b m z");
}

#[test]
fn test_vars_unset_clear() {
    let mut session = Session::new();
    run(&mut session, "set b 2");
    run(&mut session, "set a 1");
    assert_eq!(run(&mut session, "vars"), "a = 1.0\nb = 2.0");
    assert_eq!(run(&mut session, "unset a"), "");
    assert_eq!(run(&mut session, "unset a"), "");
    assert_eq!(run(&mut session, "vars"), "b = 2.0");
    run(&mut session, "clear");
    assert_eq!(run(&mut session, "vars"), "");
    assert!(session.vars().is_empty());
}

#[test]
fn test_parse_errors_surface() {
    let mut session = Session::new();
    assert!(matches!(
        session.execute("eval 5 3 2 +"),
        Err(CommandError::Parse(ParseError::IncompleteRpn { stack_size: 2, .. }))
    ));
    let mut bare = Session::with_functions(FunctionTable::new());
    let err = bare.execute("eval 3 sqrt()").unwrap_err();
    assert_eq!(err.to_string(), "undefined function 'sqrt'");
}

#[test]
fn test_set_rejects_names_expressions_cannot_reference() {
    let mut session = Session::new();
    for line in ["set 3 5", "set inf 1", "set + 1", "set f() 2"] {
        assert!(
            matches!(
                session.execute(line),
                Err(CommandError::InvalidArgument(
                    InvalidArgument::MalformedVariableName
                ))
            ),
            "{line}"
        );
    }
    assert!(session.vars().is_empty());
}

#[test]
fn test_eval_division_by_zero() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, "eval 1 0 /"), "inf");
    assert_eq!(run(&mut session, "optimize 0 0 /"), "NaN");
    assert_eq!(run(&mut session, "eval inf -1 *"), "-inf");
}

#[test]
fn test_blank_line() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, ""), "");
}

#[test]
fn test_help() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, "help"), HELP);
}
