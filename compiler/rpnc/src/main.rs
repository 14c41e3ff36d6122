//! RPN calculator CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use rpnc::{init_tracing, parse_options, run_repl, Session, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let mut session = Session::new();
    for (name, value) in &options.bindings {
        if let Err(err) = session.set_var(name, *value) {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    }

    if let Some(command) = options.command {
        return match session.execute(&command) {
            Ok(text) => {
                if !text.is_empty() {
                    println!("{text}");
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let result = run_repl(
        &mut session,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
        prompt,
    );
    if let Err(err) = result {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
