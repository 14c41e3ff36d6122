//! Read-eval-print loop over any reader and writers.

use std::io::{self, BufRead, Write};

use crate::Session;

/// Prompt shown before each line when running interactively.
const PROMPT: &str = "> ";

/// Run commands from `input` until end of input or `quit`/`exit`.
///
/// Command output goes to `output`, failures to `errors` as
/// `error: <message>`. A failing command does not end the loop.
pub fn run_repl<R, W, E>(
    session: &mut Session,
    input: R,
    output: &mut W,
    errors: &mut E,
    prompt: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut lines = input.lines();
    loop {
        if prompt {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        match session.execute(&line) {
            Ok(text) if text.is_empty() => {}
            Ok(text) => writeln!(output, "{text}")?,
            Err(err) => writeln!(errors, "error: {err}")?,
        }
    }
    Ok(())
}
