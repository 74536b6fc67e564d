//! CLI module
//!
//! Provides command-line interface for:
//! - convert: re-encode a record between wire and document form
//! - check: decode a record and report the first mismatching field
//! - fields: print a record's field table
//! - records: list record types

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, convert, convert_file, describe, list_records, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{read_input, write_error, write_value};
