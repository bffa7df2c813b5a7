//! Terminal chat host for the portfolio assistant.
//!
//! Run with: `cargo run --bin folio-chat`

use std::process::ExitCode;

fn main() -> ExitCode {
    folio_assistant::repl::run()
}
