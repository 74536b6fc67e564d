//! Document projection: records as stored in the document database
//!
//! A document is a BSON document keyed by the schema's document names.
//! Integers are stored as `Int64` and timestamps as BSON datetimes, which
//! carry millisecond precision. As JSON, documents are written in relaxed
//! extended JSON (`{"$date": ...}` for datetimes).

use bson::Bson;
use serde_json::Value;

use super::errors::{CodecError, CodecResult, DecodeError, ROOT_PATH};
use super::projector::{document_to_wire, wire_to_document};
use super::wire::to_wire_value;
use crate::schema::{Projection, Record};

/// A stored record
pub type Document = bson::Document;

/// Converts a record into a document
pub fn to_document<T: Record>(record: &T) -> CodecResult<Document> {
    let schema = T::schema();
    let wire = to_wire_value(record)?;

    wire_to_document(&wire, schema).map_err(|e| CodecError::Encode {
        record: schema.name,
        source: serde::ser::Error::custom(e),
    })
}

/// Converts a record into a document written as relaxed extended JSON
pub fn to_document_value<T: Record>(record: &T) -> CodecResult<Value> {
    to_document(record).map(document_to_value)
}

/// Decodes a record from a document
pub fn from_document<T: Record>(document: &Document) -> CodecResult<T> {
    let schema = T::schema();
    let wire = document_to_wire(document, schema)
        .map_err(|source| super::decode_failed(schema, Projection::Document, source))?;
    super::from_checked_wire(wire, schema, Projection::Document)
}

/// Decodes a record from a document held as extended JSON
pub fn from_document_value<T: Record>(value: &Value) -> CodecResult<T> {
    super::decode(value, Projection::Document)
}

/// Writes a document as relaxed extended JSON
pub fn document_to_value(document: Document) -> Value {
    Bson::Document(document).into_relaxed_extjson()
}

/// Reads a document from canonical or relaxed extended JSON
pub fn document_from_value(value: &Value) -> Result<Document, DecodeError> {
    match Bson::try_from(value.clone()) {
        Ok(Bson::Document(document)) => Ok(document),
        Ok(_) => Err(DecodeError::type_mismatch(ROOT_PATH, "object", value)),
        Err(e) => Err(DecodeError::new(ROOT_PATH, "extended JSON document", e.to_string())),
    }
}
