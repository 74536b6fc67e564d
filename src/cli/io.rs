//! JSON I/O handling for CLI
//!
//! - Input: one JSON value from a file or stdin
//! - Output: one JSON value on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the raw input text from a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e)))?,
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(text)
}

/// Write a JSON value to stdout
pub fn write_value(value: &Value, pretty: bool) -> CliResult<()> {
    let mut stdout = io::stdout();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str, path: Option<&str>) -> CliResult<()> {
    let mut response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    if let Some(path) = path {
        response["path"] = Value::from(path);
    }

    write_value(&response, false)
}
