//! Wire and document projections of records
//!
//! Encoding serializes a record with serde (wire names) and, for the
//! document projection, converts the tree into a BSON document through the
//! record's schema. Decoding goes the other way: the input is type-checked
//! and renamed to a wire tree by the projector, then deserialized. Absent
//! and `null` fields become zero values; unknown fields are ignored.
//!
//! # Usage
//!
//! ```ignore
//! use fixture_schema::codec;
//! use fixture_schema::model::FixtureData;
//!
//! let json = codec::encode_wire(&fixture)?;
//! let back: FixtureData = codec::decode_wire(&json)?;
//!
//! let doc = codec::to_document(&fixture)?;
//! let back: FixtureData = codec::from_document(&doc)?;
//! ```

mod document;
mod errors;
mod projector;
mod wire;

pub use document::{
    document_from_value, document_to_value, from_document, from_document_value, to_document,
    to_document_value, Document,
};
pub use errors::{CodecError, CodecResult, DecodeError, ROOT_PATH};
pub use projector::{check_wire, document_to_wire, wire_to_document};
pub use wire::{decode_wire, encode_wire, encode_wire_pretty, from_wire_value, to_wire_value};

use serde_json::{Map, Value};

use crate::observability::{log_event_with_fields, Event};
use crate::schema::{Projection, Record, RecordSchema};

/// Encodes a record into the given projection.
///
/// Documents come back as relaxed extended JSON.
pub fn encode<T: Record>(record: &T, projection: Projection) -> CodecResult<Value> {
    let value = match projection {
        Projection::Wire => to_wire_value(record)?,
        Projection::Document => to_document_value(record)?,
    };
    log_event_with_fields(
        Event::RecordEncoded,
        &[("projection", projection.as_str()), ("record", T::schema().name)],
    );
    Ok(value)
}

/// Decodes a record from a JSON tree in the given projection
pub fn decode<T: Record>(value: &Value, projection: Projection) -> CodecResult<T> {
    let schema = T::schema();
    let wire = wire_tree(value, schema, projection)
        .map_err(|source| decode_failed(schema, projection, source))?;
    from_checked_wire(wire, schema, projection)
}

/// Re-encodes a record tree in another projection without a typed
/// intermediate.
///
/// Applies the same checks as decoding, so `null` and unknown keys are
/// dropped from the output.
pub fn convert(
    value: &Value,
    schema: &'static RecordSchema,
    from: Projection,
    to: Projection,
) -> CodecResult<Value> {
    let wire = wire_tree(value, schema, from).map_err(|source| decode_failed(schema, from, source))?;
    match to {
        Projection::Wire => Ok(Value::Object(wire)),
        Projection::Document => wire_to_document(&Value::Object(wire), schema)
            .map(document_to_value)
            .map_err(|source| decode_failed(schema, from, source)),
    }
}

/// Type-checks `value` in `projection` and renames it to wire names.
fn wire_tree(
    value: &Value,
    schema: &RecordSchema,
    projection: Projection,
) -> Result<Map<String, Value>, DecodeError> {
    match projection {
        Projection::Wire => check_wire(value, schema),
        Projection::Document => document_to_wire(&document_from_value(value)?, schema),
    }
}

/// Deserializes a wire tree the projector has already checked.
fn from_checked_wire<T: Record>(
    wire: Map<String, Value>,
    schema: &'static RecordSchema,
    projection: Projection,
) -> CodecResult<T> {
    let record = serde_json::from_value(Value::Object(wire)).map_err(|e| {
        decode_failed(
            schema,
            projection,
            DecodeError::new(ROOT_PATH, schema.name, e.to_string()),
        )
    })?;

    log_event_with_fields(
        Event::RecordDecoded,
        &[("projection", projection.as_str()), ("record", schema.name)],
    );
    Ok(record)
}

/// Builds a decode error and logs it.
fn decode_failed(schema: &'static RecordSchema, projection: Projection, source: DecodeError) -> CodecError {
    log_event_with_fields(
        Event::DecodeFailed,
        &[
            ("path", source.path.as_str()),
            ("projection", projection.as_str()),
            ("record", schema.name),
        ],
    );
    CodecError::Decode {
        record: schema.name,
        projection,
        source,
    }
}
