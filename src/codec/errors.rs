//! Codec error types
//!
//! Error codes:
//! - SCHEMA_MALFORMED_INPUT: input is not JSON
//! - SCHEMA_DECODE_FAILED: a field does not match its declared type
//! - SCHEMA_ENCODE_FAILED: a record could not be serialized

use bson::Bson;
use serde_json::Value;
use thiserror::Error;

use crate::schema::Projection;

/// Path of the record root in error messages
pub const ROOT_PATH: &str = "$root";

/// A field whose value does not match its declared type.
///
/// `path` uses the names of the projection being decoded, dots for nesting
/// and `[i]` for sequence elements, e.g. `current_data.events[1].time_elapsed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{path}': expected {expected}, got {found}")]
pub struct DecodeError {
    /// Field path
    pub path: String,
    /// Expected type
    pub expected: String,
    /// Actual JSON type or reason
    pub found: String,
}

impl DecodeError {
    pub fn new(path: impl Into<String>, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Type mismatch against the JSON type of `actual`
    pub fn type_mismatch(path: impl Into<String>, expected: impl Into<String>, actual: &Value) -> Self {
        Self::new(path, expected, json_type_name(actual))
    }

    /// Type mismatch against the BSON type of `actual`
    pub fn bson_mismatch(path: impl Into<String>, expected: impl Into<String>, actual: &Bson) -> Self {
        Self::new(path, expected, bson_type_name(actual))
    }
}

/// Errors raised while mapping records to and from a projection
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input text is not JSON
    #[error("malformed {projection} input: {source}")]
    Syntax {
        projection: Projection,
        #[source]
        source: serde_json::Error,
    },

    /// Input is JSON but a field has the wrong type
    #[error("cannot decode {record} from {projection}: {source}")]
    Decode {
        record: &'static str,
        projection: Projection,
        #[source]
        source: DecodeError,
    },

    /// Record could not be serialized
    #[error("cannot encode {record}: {source}")]
    Encode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CodecError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::Syntax { .. } => "SCHEMA_MALFORMED_INPUT",
            CodecError::Decode { .. } => "SCHEMA_DECODE_FAILED",
            CodecError::Encode { .. } => "SCHEMA_ENCODE_FAILED",
        }
    }

    /// Returns the offending field path for decode failures
    pub fn field_path(&self) -> Option<&str> {
        match self {
            CodecError::Decode { source, .. } => Some(&source.path),
            _ => None,
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the BSON type name for error messages.
pub(crate) fn bson_type_name(value: &Bson) -> &'static str {
    match value {
        Bson::Null => "null",
        Bson::Boolean(_) => "bool",
        Bson::Int32(_) | Bson::Int64(_) => "int",
        Bson::Double(_) => "double",
        Bson::String(_) => "string",
        Bson::Array(_) => "array",
        Bson::Document(_) => "object",
        Bson::DateTime(_) => "datetime",
        Bson::Timestamp(_) => "bson timestamp",
        Bson::ObjectId(_) => "objectid",
        Bson::Decimal128(_) => "decimal128",
        Bson::Binary(_) => "binary",
        _ => "bson value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::type_mismatch("current_data.game_time", "int", &json!("45"));
        let display = err.to_string();
        assert!(display.contains("current_data.game_time"));
        assert!(display.contains("int"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_error_codes() {
        let syntax = CodecError::Syntax {
            projection: Projection::Wire,
            source: serde_json::from_str::<Value>("{").unwrap_err(),
        };
        assert_eq!(syntax.code(), "SCHEMA_MALFORMED_INPUT");
        assert!(syntax.field_path().is_none());

        let decode = CodecError::Decode {
            record: "Event",
            projection: Projection::Document,
            source: DecodeError::new("time_elapsed", "int", "float"),
        };
        assert_eq!(decode.code(), "SCHEMA_DECODE_FAILED");
        assert_eq!(decode.field_path(), Some("time_elapsed"));
        assert!(decode.to_string().contains("document"));
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(3)), "int");
        assert_eq!(json_type_name(&json!(3.5)), "float");
        assert_eq!(json_type_name(&json!([])), "array");
    }

    #[test]
    fn test_bson_type_names() {
        assert_eq!(bson_type_name(&Bson::Int32(3)), "int");
        assert_eq!(bson_type_name(&Bson::Int64(3)), "int");
        assert_eq!(bson_type_name(&Bson::Double(3.5)), "double");
        assert_eq!(bson_type_name(&Bson::DateTime(bson::DateTime::from_millis(0))), "datetime");
        assert_eq!(bson_type_name(&Bson::String("45".into())), "string");
    }
}
