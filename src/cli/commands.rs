//! CLI command implementations
//!
//! Commands are thin: they read one JSON value, run it through the codec,
//! and print the result. Every record type goes through the typed codec, so
//! conversions apply exactly the rules library callers get.

use std::path::Path;

use serde_json::{json, Value};

use crate::codec::{self, CodecError};
use crate::model::RecordKind;
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::schema::{Projection, Record, RecordSchema};
use crate::with_record_type;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_input, write_error, write_value};

/// Parse arguments, run the command, report failures as JSON
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match run_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            write_error(e.code_str(), &e.to_string(), e.field_path())?;
            Err(e)
        }
    }
}

/// Run a parsed command
pub fn run_command(cli: &Cli) -> CliResult<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    Logger::set_min_severity(config.severity()?);
    if let Some(path) = &cli.config {
        let shown = path.display().to_string();
        log_event_with_fields(Event::ConfigLoaded, &[("path", shown.as_str())]);
    }

    match &cli.command {
        Command::Convert {
            record,
            from,
            to,
            input,
        } => {
            let text = read_input(input.as_deref())?;
            let output = convert(*record, *from, *to, &text)?;
            write_value(&output, config.pretty)
        }
        Command::Check {
            record,
            from,
            input,
        } => {
            let text = read_input(input.as_deref())?;
            check(*record, *from, &text)?;
            write_value(&json!({"status": "ok", "record": record.name()}), config.pretty)
        }
        Command::Fields { record } => write_value(&describe(record.schema()), config.pretty),
        Command::Records => write_value(&list_records(), config.pretty),
    }
}

/// Decode `text` as `kind` in `from`, re-encode in `to`
pub fn convert(kind: RecordKind, from: Projection, to: Projection, text: &str) -> CliResult<Value> {
    let kind_name = kind.name();
    log_event_with_fields(
        Event::ConvertStart,
        &[("from", from.as_str()), ("record", kind_name), ("to", to.as_str())],
    );

    let input = parse_input(text, from)?;
    let output = with_record_type!(kind, T => roundtrip::<T>(&input, from, to)?);

    log_event_with_fields(Event::ConvertComplete, &[("record", kind_name)]);
    Ok(output)
}

/// Decode `text` as `kind` in `from`, discarding the record
pub fn check(kind: RecordKind, from: Projection, text: &str) -> CliResult<()> {
    let input = parse_input(text, from)?;
    with_record_type!(kind, T => codec::decode::<T>(&input, from).map(|_| ())?);
    Ok(())
}

/// Field table of a record as JSON
pub fn describe(schema: &RecordSchema) -> Value {
    let fields: Vec<Value> = schema
        .fields
        .iter()
        .map(|f| {
            json!({
                "logical": f.logical,
                "wire": f.wire,
                "document": f.document,
                "type": f.field_type.describe(),
            })
        })
        .collect();

    json!({ "record": schema.name, "fields": fields })
}

/// Every record kind with its field count
pub fn list_records() -> Value {
    let records: Vec<Value> = RecordKind::ALL
        .iter()
        .map(|kind| {
            json!({
                "record": kind.name(),
                "fields": kind.schema().fields.len(),
                "aggregate": kind.is_aggregate(),
            })
        })
        .collect();

    Value::Array(records)
}

fn parse_input(text: &str, projection: Projection) -> CliResult<Value> {
    serde_json::from_str(text)
        .map_err(|source| CliError::from(CodecError::Syntax { projection, source }))
}

fn roundtrip<T: Record>(input: &Value, from: Projection, to: Projection) -> CliResult<Value> {
    let record: T = codec::decode(input, from)?;
    Ok(codec::encode(&record, to)?)
}

/// Path-based convenience for callers holding a file
pub fn convert_file(kind: RecordKind, from: Projection, to: Projection, path: &Path) -> CliResult<Value> {
    let text = read_input(Some(path))?;
    convert(kind, from, to, &text)
}
