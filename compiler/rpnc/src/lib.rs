//! RPN calculator front end.
//!
//! ```text
//! command line ──► Session::execute ──► rpn_parse::parse ──► Expr
//!                                                         │
//!                        eval / infix / optimize / ... ◄──┘
//! ```
//!
//! A [`Session`] owns the variable bindings and function table that every
//! command runs against. The binary wraps a session in either a one-shot
//! command or a read-eval-print loop.

mod options;
mod repl;
mod session;

use std::sync::Once;

pub use options::{parse_options, Options, USAGE};
pub use repl::run_repl;
pub use session::{CommandError, Session, HELP};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=rpn_parse=trace` or
/// `RUST_LOG=debug`; without `RUST_LOG` nothing is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
