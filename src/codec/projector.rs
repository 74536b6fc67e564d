//! Schema-driven projection of record trees
//!
//! Walks a source tree alongside a `RecordSchema`, renaming every known key
//! to the target projection's names and type-checking values on the way.
//! Wire trees are JSON; documents are BSON, with `Int64` integers and native
//! datetimes.
//!
//! Decoding rules:
//! - Absent fields and `null` values are dropped, so they decode to zero values
//! - Unknown keys are ignored
//! - A `null` sequence element becomes the zero record
//! - Integers must fit in i64 (BSON `Int32` is widened)
//! - Timestamps are RFC 3339 strings on the wire and BSON datetimes in
//!   documents, with a UTC year in `MIN_YEAR..=MAX_YEAR`
//!
//! The projector never fills in defaults or computes fields; typed
//! deserialization supplies the zero values afterwards.

use bson::{Bson, Document};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::errors::{DecodeError, ROOT_PATH};
use crate::schema::{format_rfc3339, in_range, FieldType, RecordSchema, MAX_YEAR, MIN_YEAR};

/// Type-checks a wire tree, keeping only known non-null fields.
///
/// Errors name the offending field by its wire path.
pub fn check_wire(value: &Value, schema: &RecordSchema) -> Result<Map<String, Value>, DecodeError> {
    check_wire_object(value, schema, "")
}

/// Converts a wire tree into a document, renaming keys to document names.
///
/// Fields are written in declaration order.
pub fn wire_to_document(value: &Value, schema: &RecordSchema) -> Result<Document, DecodeError> {
    wire_object_to_document(value, schema, "")
}

/// Converts a document into a wire tree, renaming keys to wire names.
///
/// Errors name the offending field by its document path.
pub fn document_to_wire(document: &Document, schema: &RecordSchema) -> Result<Map<String, Value>, DecodeError> {
    document_object_to_wire(document, schema, "")
}

// =============================================================================
// Wire -> wire
// =============================================================================

fn check_wire_object(
    value: &Value,
    schema: &RecordSchema,
    path_prefix: &str,
) -> Result<Map<String, Value>, DecodeError> {
    let obj = value.as_object().ok_or_else(|| {
        DecodeError::type_mismatch(display_path(path_prefix), "object", value)
    })?;

    let mut out = Map::new();

    for field in schema.fields {
        let Some(field_value) = obj.get(field.wire) else {
            continue;
        };
        if field_value.is_null() {
            continue;
        }

        let field_path = make_path(path_prefix, field.wire);
        let checked = match &field.field_type {
            FieldType::String => Value::String(wire_string(field_value, &field_path)?.to_string()),
            FieldType::Int => Value::from(wire_int(field_value, &field_path)?),
            FieldType::Bool => Value::Bool(wire_bool(field_value, &field_path)?),
            FieldType::Timestamp => {
                wire_timestamp(field_value, &field_path)?;
                field_value.clone()
            }
            FieldType::Record(nested) => {
                Value::Object(check_wire_object(field_value, nested(), &field_path)?)
            }
            FieldType::Sequence(nested) => {
                let elems = wire_array(field_value, &field_path)?;
                let mut out = Vec::with_capacity(elems.len());
                for (i, elem) in elems.iter().enumerate() {
                    if elem.is_null() {
                        out.push(Value::Object(Map::new()));
                        continue;
                    }
                    let elem_path = format!("{}[{}]", field_path, i);
                    out.push(Value::Object(check_wire_object(elem, nested(), &elem_path)?));
                }
                Value::Array(out)
            }
        };
        out.insert(field.wire.to_string(), checked);
    }

    Ok(out)
}

// =============================================================================
// Wire -> document
// =============================================================================

fn wire_object_to_document(
    value: &Value,
    schema: &RecordSchema,
    path_prefix: &str,
) -> Result<Document, DecodeError> {
    let obj = value.as_object().ok_or_else(|| {
        DecodeError::type_mismatch(display_path(path_prefix), "object", value)
    })?;

    let mut out = Document::new();

    for field in schema.fields {
        let Some(field_value) = obj.get(field.wire) else {
            continue;
        };
        if field_value.is_null() {
            continue;
        }

        let field_path = make_path(path_prefix, field.wire);
        let converted = match &field.field_type {
            FieldType::String => Bson::String(wire_string(field_value, &field_path)?.to_string()),
            FieldType::Int => Bson::Int64(wire_int(field_value, &field_path)?),
            FieldType::Bool => Bson::Boolean(wire_bool(field_value, &field_path)?),
            FieldType::Timestamp => {
                let instant = wire_timestamp(field_value, &field_path)?;
                Bson::DateTime(bson::DateTime::from_chrono(instant))
            }
            FieldType::Record(nested) => {
                Bson::Document(wire_object_to_document(field_value, nested(), &field_path)?)
            }
            FieldType::Sequence(nested) => {
                let elems = wire_array(field_value, &field_path)?;
                let mut out = Vec::with_capacity(elems.len());
                for (i, elem) in elems.iter().enumerate() {
                    if elem.is_null() {
                        out.push(Bson::Document(Document::new()));
                        continue;
                    }
                    let elem_path = format!("{}[{}]", field_path, i);
                    out.push(Bson::Document(wire_object_to_document(elem, nested(), &elem_path)?));
                }
                Bson::Array(out)
            }
        };
        out.insert(field.document, converted);
    }

    Ok(out)
}

fn wire_string<'a>(value: &'a Value, path: &str) -> Result<&'a str, DecodeError> {
    value
        .as_str()
        .ok_or_else(|| DecodeError::type_mismatch(path, "string", value))
}

fn wire_int(value: &Value, path: &str) -> Result<i64, DecodeError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if value.is_u64() {
        return Err(DecodeError::new(path, "int", "integer out of i64 range"));
    }
    Err(DecodeError::type_mismatch(path, "int", value))
}

fn wire_bool(value: &Value, path: &str) -> Result<bool, DecodeError> {
    value
        .as_bool()
        .ok_or_else(|| DecodeError::type_mismatch(path, "bool", value))
}

fn wire_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, DecodeError> {
    value
        .as_array()
        .ok_or_else(|| DecodeError::type_mismatch(path, "sequence", value))
}

/// Parses an RFC 3339 timestamp and normalizes it to UTC.
fn wire_timestamp(value: &Value, path: &str) -> Result<DateTime<Utc>, DecodeError> {
    let text = value
        .as_str()
        .ok_or_else(|| DecodeError::type_mismatch(path, "timestamp", value))?;
    let instant = DateTime::parse_from_rfc3339(text)
        .map_err(|e| DecodeError::new(path, "RFC 3339 timestamp", format!("'{}' ({})", text, e)))?
        .with_timezone(&Utc);
    check_year(instant, path, text)
}

fn check_year(instant: DateTime<Utc>, path: &str, shown: &str) -> Result<DateTime<Utc>, DecodeError> {
    if !in_range(&instant) {
        return Err(DecodeError::new(
            path,
            format!("timestamp with UTC year {}..={}", MIN_YEAR, MAX_YEAR),
            format!("'{}'", shown),
        ));
    }
    Ok(instant)
}

// =============================================================================
// Document -> wire
// =============================================================================

fn document_object_to_wire(
    document: &Document,
    schema: &RecordSchema,
    path_prefix: &str,
) -> Result<Map<String, Value>, DecodeError> {
    let mut out = Map::new();

    for field in schema.fields {
        let Some(field_value) = document.get(field.document) else {
            continue;
        };
        if matches!(field_value, Bson::Null) {
            continue;
        }

        let field_path = make_path(path_prefix, field.document);
        let converted = match (&field.field_type, field_value) {
            (FieldType::String, Bson::String(s)) => Value::String(s.clone()),
            (FieldType::Int, Bson::Int32(n)) => Value::from(i64::from(*n)),
            (FieldType::Int, Bson::Int64(n)) => Value::from(*n),
            (FieldType::Bool, Bson::Boolean(b)) => Value::Bool(*b),
            (FieldType::Timestamp, Bson::DateTime(dt)) => {
                let instant = dt.to_chrono();
                let shown = format!("{} ms since epoch", dt.timestamp_millis());
                Value::String(format_rfc3339(&check_year(instant, &field_path, &shown)?))
            }
            (FieldType::Record(nested), Bson::Document(doc)) => {
                Value::Object(document_object_to_wire(doc, nested(), &field_path)?)
            }
            (FieldType::Sequence(nested), Bson::Array(elems)) => {
                let mut out = Vec::with_capacity(elems.len());
                for (i, elem) in elems.iter().enumerate() {
                    let elem_path = format!("{}[{}]", field_path, i);
                    match elem {
                        Bson::Null => out.push(Value::Object(Map::new())),
                        Bson::Document(doc) => {
                            out.push(Value::Object(document_object_to_wire(doc, nested(), &elem_path)?))
                        }
                        other => return Err(DecodeError::bson_mismatch(elem_path, "object", other)),
                    }
                }
                Value::Array(out)
            }
            (field_type, other) => {
                return Err(DecodeError::bson_mismatch(field_path, expected_name(field_type), other));
            }
        };
        out.insert(field.wire.to_string(), converted);
    }

    Ok(out)
}

fn expected_name(field_type: &FieldType) -> &'static str {
    match field_type {
        FieldType::Record(_) => "object",
        other => other.type_name(),
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        ROOT_PATH
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FixtureData, GeneralFixtureData, StandingsData};
    use crate::schema::Record;
    use bson::doc;
    use serde_json::json;

    #[test]
    fn test_renames_nested_keys() {
        let wire = json!({
            "league_name": "Premier League",
            "standings": [{"team_name": "Arsenal", "goals_diff": 12, "all": {"goals": {"for": 30}}}]
        });

        let document = wire_to_document(&wire, StandingsData::schema()).unwrap();
        assert_eq!(
            document,
            doc! {
                "name": "Premier League",
                "standings": [{"team": "Arsenal", "goalsdiff": 12_i64, "all": {"goals": {"for": 30_i64}}}]
            }
        );

        let back = document_to_wire(&document, StandingsData::schema()).unwrap();
        assert_eq!(Value::Object(back), wire);
    }

    #[test]
    fn test_drops_nulls_and_unknown_keys() {
        let wire = json!({"referee": null, "venue": "Anfield", "attendance": 53000});
        let out = check_wire(&wire, FixtureData::schema()).unwrap();
        assert_eq!(Value::Object(out), json!({"venue": "Anfield"}));

        let document = doc! {"referee": null, "venue": "Anfield", "attendance": 53000};
        let out = document_to_wire(&document, FixtureData::schema()).unwrap();
        assert_eq!(Value::Object(out), json!({"venue": "Anfield"}));
    }

    #[test]
    fn test_null_sequence_element_becomes_empty_record() {
        let wire = json!({"events": [null, {"team": "Everton"}]});
        let document = wire_to_document(&wire, FixtureData::schema()).unwrap();
        assert_eq!(document, doc! {"events": [{}, {"team": "Everton"}]});

        let document = doc! {"events": [null, {"team": "Everton"}]};
        let out = document_to_wire(&document, FixtureData::schema()).unwrap();
        assert_eq!(Value::Object(out), json!({"events": [{}, {"team": "Everton"}]}));
    }

    #[test]
    fn test_timestamps_become_bson_datetimes() {
        let wire = json!({"date": "2024-03-10T16:30:00+01:00"});
        let document = wire_to_document(&wire, FixtureData::schema()).unwrap();
        let stored = document.get_datetime("date").unwrap();
        assert_eq!(stored.timestamp_millis(), 1_710_084_600_000);

        let back = document_to_wire(&document, FixtureData::schema()).unwrap();
        assert_eq!(back["date"], "2024-03-10T15:30:00Z");
    }

    #[test]
    fn test_document_int32_is_widened() {
        let document = doc! {"game_time": 90_i32, "goals_home": 2_i64};
        let out = document_to_wire(&document, FixtureData::schema()).unwrap();
        assert_eq!(Value::Object(out), json!({"game_time": 90, "goals_home": 2}));
    }

    #[test]
    fn test_error_path_uses_source_names() {
        let document = doc! {"current_data": {"events": [{}, {"time_elapsed": "12"}]}};
        let err = document_to_wire(&document, GeneralFixtureData::schema()).unwrap_err();
        assert_eq!(err.path, "current_data.events[1].time_elapsed");
        assert_eq!(err.expected, "int");
        assert_eq!(err.found, "string");

        let wire = json!({"fixture_data": {"events": [{}, {"time_elapsed": "12"}]}});
        let err = check_wire(&wire, GeneralFixtureData::schema()).unwrap_err();
        assert_eq!(err.path, "fixture_data.events[1].time_elapsed");
    }

    #[test]
    fn test_document_rejects_string_timestamp() {
        let document = doc! {"date": "2024-03-10T15:30:00Z"};
        let err = document_to_wire(&document, FixtureData::schema()).unwrap_err();
        assert_eq!(err.path, "date");
        assert_eq!(err.expected, "timestamp");
        assert_eq!(err.found, "string");
    }

    #[test]
    fn test_rejects_float_for_int() {
        let wire = json!({"game_time": 45.5});
        let err = check_wire(&wire, FixtureData::schema()).unwrap_err();
        assert_eq!(err.path, "game_time");
        assert_eq!(err.found, "float");
    }

    #[test]
    fn test_rejects_int_beyond_i64() {
        let wire = json!({"fixture_data": {"goals_home": 9_223_372_036_854_775_808_u64}});
        let err = check_wire(&wire, GeneralFixtureData::schema()).unwrap_err();
        assert_eq!(err.path, "fixture_data.goals_home");
        assert_eq!(err.expected, "int");
        assert_eq!(err.found, "integer out of i64 range");

        let err = wire_to_document(&wire, GeneralFixtureData::schema()).unwrap_err();
        assert_eq!(err.found, "integer out of i64 range");
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let wire = json!({"date": "yesterday"});
        let err = check_wire(&wire, FixtureData::schema()).unwrap_err();
        assert_eq!(err.path, "date");
        assert!(err.found.contains("yesterday"));
    }

    #[test]
    fn test_rejects_year_past_9999_in_utc() {
        let wire = json!({"update_at": "9999-12-31T23:59:59-01:00"});
        let err = check_wire(&wire, FixtureData::schema()).unwrap_err();
        assert_eq!(err.path, "update_at");
        assert!(err.expected.contains("9999"));

        let last = json!({"update_at": "9999-12-31T23:59:59Z"});
        assert!(check_wire(&last, FixtureData::schema()).is_ok());
        assert!(wire_to_document(&last, FixtureData::schema()).is_ok());
    }

    #[test]
    fn test_document_rejects_out_of_range_datetime() {
        let far = bson::DateTime::from_millis(300_000_000_000_000);
        let document = doc! {"date": far};
        let err = document_to_wire(&document, FixtureData::schema()).unwrap_err();
        assert_eq!(err.path, "date");
        assert!(err.found.contains("ms since epoch"));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = check_wire(&json!([1, 2]), FixtureData::schema()).unwrap_err();
        assert_eq!(err.path, ROOT_PATH);
        assert_eq!(err.found, "array");
    }
}
