//! fixture-schema CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`, which already
//! printed a JSON error object; the process exits non-zero on failure.

use fixture_schema::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
