//! Calculator session: bindings, functions and the command interpreter.

use rpn_expr::Expr;
use rpn_ir::{format_number, FunctionTable, InvalidArgument, UnboundVariable, VarTable};
use rpn_parse::{parse, ParseError};
use thiserror::Error;
use tracing::debug;

/// Text printed by the `help` command.
pub const HELP: &str = "\
commands:
  set <name> <value>   bind a variable
  unset <name>         remove a binding
  vars                 list bindings
  clear                remove all bindings
  eval <rpn>           evaluate an expression
  infix <rpn>          print in infix notation
  postfix <rpn>        print in postfix notation
  opcount <rpn>        count operations
  optimize <rpn>       fold constants using current bindings
  deps <rpn>           list free variables
  help                 show this message";

/// Why a command failed.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] UnboundVariable),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

/// A parsed command line.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Command<'a> {
    Set { name: &'a str, value: f64 },
    Unset(&'a str),
    Vars,
    Clear,
    Eval(&'a str),
    Infix(&'a str),
    Postfix(&'a str),
    OpCount(&'a str),
    Optimize(&'a str),
    Deps(&'a str),
    Help,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));
        let command = match word {
            "set" => {
                let mut args = rest.split_whitespace();
                let (Some(name), Some(value), None) = (args.next(), args.next(), args.next())
                else {
                    return Err(CommandError::Usage("set <name> <value>"));
                };
                let value = value
                    .parse()
                    .map_err(|_| CommandError::InvalidNumber(value.to_owned()))?;
                Command::Set { name, value }
            }
            "unset" => {
                let mut args = rest.split_whitespace();
                let (Some(name), None) = (args.next(), args.next()) else {
                    return Err(CommandError::Usage("unset <name>"));
                };
                Command::Unset(name)
            }
            "vars" => no_args(rest, Command::Vars, "vars")?,
            "clear" => no_args(rest, Command::Clear, "clear")?,
            "help" => no_args(rest, Command::Help, "help")?,
            "eval" => Command::Eval(rest),
            "infix" => Command::Infix(rest),
            "postfix" => Command::Postfix(rest),
            "opcount" => Command::OpCount(rest),
            "optimize" => Command::Optimize(rest),
            "deps" => Command::Deps(rest),
            _ => return Err(CommandError::UnknownCommand(word.to_owned())),
        };
        Ok(Some(command))
    }
}

fn no_args<'a>(
    rest: &str,
    command: Command<'a>,
    usage: &'static str,
) -> Result<Command<'a>, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Usage(usage))
    }
}

/// Variable bindings and functions shared by every command in a session.
#[derive(Clone, Debug)]
pub struct Session {
    vars: VarTable,
    functions: FunctionTable,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with no bindings and the builtin functions.
    pub fn new() -> Self {
        Self::with_functions(FunctionTable::builtins())
    }

    pub fn with_functions(functions: FunctionTable) -> Self {
        Session {
            vars: VarTable::new(),
            functions,
        }
    }

    pub fn vars(&self) -> &VarTable {
        &self.vars
    }

    pub fn set_var(&mut self, name: &str, value: f64) -> Result<(), CommandError> {
        self.vars.set(name, value)?;
        Ok(())
    }

    /// Run one command line and return the text to print.
    ///
    /// Blank lines succeed with empty output.
    pub fn execute(&mut self, line: &str) -> Result<String, CommandError> {
        let Some(command) = Command::parse(line)? else {
            return Ok(String::new());
        };
        debug!(?command, "executing command");
        let output = match command {
            Command::Set { name, value } => {
                self.set_var(name, value)?;
                format!("{name} = {}", format_number(value))
            }
            Command::Unset(name) => {
                self.vars.unset(name);
                String::new()
            }
            Command::Vars => self.list_vars(),
            Command::Clear => {
                self.vars.clear();
                String::new()
            }
            Command::Eval(source) => format_number(self.parse(source)?.eval(&self.vars)?),
            Command::Infix(source) => self.parse(source)?.infix(),
            Command::Postfix(source) => self.parse(source)?.postfix(),
            Command::OpCount(source) => self.parse(source)?.op_count().to_string(),
            Command::Optimize(source) => self.parse(source)?.optimize(&self.vars).infix(),
            Command::Deps(source) => {
                let expr = self.parse(source)?;
                let mut names: Vec<&str> = expr.free_variables().into_iter().collect();
                names.sort_unstable();
                names.join(" ")
            }
            Command::Help => HELP.to_owned(),
        };
        Ok(output)
    }

    fn parse(&self, source: &str) -> Result<Expr, ParseError> {
        parse(source, &self.functions)
    }

    fn list_vars(&self) -> String {
        let mut lines = Vec::with_capacity(self.vars.len());
        for name in self.vars.names() {
            if let Ok(value) = self.vars.get(name) {
                lines.push(format!("{name} = {}", format_number(value)));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests;
