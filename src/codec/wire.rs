//! Wire projection: JSON payloads named as the record structs declare them

use serde_json::Value;

use super::errors::{CodecError, CodecResult};
use crate::schema::{Projection, Record};

/// Serializes a record to a wire JSON tree
pub fn to_wire_value<T: Record>(record: &T) -> CodecResult<Value> {
    serde_json::to_value(record).map_err(|source| CodecError::Encode {
        record: T::schema().name,
        source,
    })
}

/// Serializes a record to compact wire JSON text
pub fn encode_wire<T: Record>(record: &T) -> CodecResult<String> {
    serde_json::to_string(record).map_err(|source| CodecError::Encode {
        record: T::schema().name,
        source,
    })
}

/// Serializes a record to indented wire JSON text
pub fn encode_wire_pretty<T: Record>(record: &T) -> CodecResult<String> {
    serde_json::to_string_pretty(record).map_err(|source| CodecError::Encode {
        record: T::schema().name,
        source,
    })
}

/// Decodes a record from a wire JSON tree
pub fn from_wire_value<T: Record>(value: &Value) -> CodecResult<T> {
    super::decode(value, Projection::Wire)
}

/// Decodes a record from wire JSON text
pub fn decode_wire<T: Record>(text: &str) -> CodecResult<T> {
    let value: Value = serde_json::from_str(text).map_err(|source| CodecError::Syntax {
        projection: Projection::Wire,
        source,
    })?;
    from_wire_value(&value)
}
