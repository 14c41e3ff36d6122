//! Command-line options for the `rpnc` binary.

use rpn_ir::VarName;

use crate::CommandError;

pub const USAGE: &str = "\
usage: rpnc [--var <name>=<value>]... [<command> [<args>...]]

With a command, runs it once and exits. Without one, reads commands from
standard input (`help` lists them, `quit` or end of input exits).

Options:
  --var <name>=<value>   bind a variable before running (repeatable)
  -h, --help             show this message

Logging: set RUST_LOG (e.g. RUST_LOG=debug) to trace parsing and optimization.";

const VAR_USAGE: &str = "--var <name>=<value>";

/// Parsed command-line options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// Bindings from `--var`, in the order given.
    pub bindings: Vec<(String, f64)>,
    /// The command to run once, if any (remaining arguments joined by spaces).
    pub command: Option<String>,
    /// `-h` / `--help` was given.
    pub help: bool,
}

/// Parse arguments (without the program name).
///
/// Options are only recognized before the first command word; everything
/// from the command word on belongs to the command, so `eval -3 abs()` is
/// passed through untouched.
pub fn parse_options(args: &[String]) -> Result<Options, CommandError> {
    let mut options = Options::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-h" || arg == "--help" {
            options.help = true;
            i += 1;
        } else if let Some(binding) = arg.strip_prefix("--var=") {
            options.bindings.push(parse_binding(binding)?);
            i += 1;
        } else if arg == "--var" {
            let binding = args
                .get(i + 1)
                .ok_or(CommandError::Usage(VAR_USAGE))?;
            options.bindings.push(parse_binding(binding)?);
            i += 2;
        } else if arg.starts_with("--") {
            return Err(CommandError::Usage(USAGE));
        } else {
            options.command = Some(args[i..].join(" "));
            break;
        }
    }
    Ok(options)
}

fn parse_binding(binding: &str) -> Result<(String, f64), CommandError> {
    let (name, value) = binding
        .split_once('=')
        .ok_or(CommandError::Usage(VAR_USAGE))?;
    let name = VarName::new(name)?;
    let value = value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value.to_owned()))?;
    Ok((name.as_str().to_owned(), value))
}
