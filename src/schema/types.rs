//! Field and record metadata
//!
//! Every record field carries:
//! - a logical name (the Rust field name)
//! - a wire name (JSON payloads)
//! - a document name (document-store records)
//! - a semantic type
//!
//! Wire and document names are stored side by side and never derived from
//! one another: several fields deliberately diverge between the two.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The two external representations of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Request/response payload naming
    Wire,
    /// Document-database field naming
    Document,
}

impl Projection {
    /// Returns the projection name for logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Projection::Wire => "wire",
            Projection::Document => "document",
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accessor for a nested record's schema.
///
/// A function pointer rather than a reference so field tables can point at
/// each other from `static` items.
pub type SchemaRef = fn() -> &'static RecordSchema;

/// Semantic field types
#[derive(Clone, Copy)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// UTC instant: RFC 3339 text on the wire, a BSON datetime in documents
    Timestamp,
    /// Nested record
    Record(SchemaRef),
    /// Ordered sequence of a nested record
    Sequence(SchemaRef),
}

impl FieldType {
    /// Returns the type name for error messages and field listings
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Timestamp => "timestamp",
            FieldType::Record(_) => "record",
            FieldType::Sequence(_) => "sequence",
        }
    }

    /// Returns the nested schema for record and sequence fields
    pub fn nested(&self) -> Option<&'static RecordSchema> {
        match self {
            FieldType::Record(schema) | FieldType::Sequence(schema) => Some(schema()),
            _ => None,
        }
    }

    /// Human-readable description, e.g. `sequence<Event>`
    pub fn describe(&self) -> String {
        match self {
            FieldType::Record(schema) => schema().name.to_string(),
            FieldType::Sequence(schema) => format!("sequence<{}>", schema().name),
            other => other.type_name().to_string(),
        }
    }
}

impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// One field of a record
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Rust field name
    pub logical: &'static str,
    /// Name in the wire projection
    pub wire: &'static str,
    /// Name in the document projection
    pub document: &'static str,
    /// Semantic type
    pub field_type: FieldType,
}

impl FieldDef {
    /// Returns this field's name in the given projection
    pub fn name(&self, projection: Projection) -> &'static str {
        match projection {
            Projection::Wire => self.wire,
            Projection::Document => self.document,
        }
    }
}

/// Field table of a record type
#[derive(Debug)]
pub struct RecordSchema {
    /// Record type name
    pub name: &'static str,
    /// Fields in declaration order
    pub fields: &'static [FieldDef],
}

impl RecordSchema {
    /// Looks up a field by logical name
    pub fn field(&self, logical: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.logical == logical)
    }

    /// Looks up a field by its external name in a projection
    pub fn field_by_name(&self, projection: Projection, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.name(projection) == name)
    }

    /// Returns the external names of all fields, in declaration order
    pub fn names(&self, projection: Projection) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name(projection)).collect()
    }

    /// Verifies the naming contract of this table.
    ///
    /// No name may be empty, and no two fields may share a logical name, a
    /// wire name, or a document name.
    pub fn check_names(&self) -> Result<(), String> {
        let mut logical = HashSet::new();
        let mut wire = HashSet::new();
        let mut document = HashSet::new();

        for field in self.fields {
            if field.logical.is_empty() || field.wire.is_empty() || field.document.is_empty() {
                return Err(format!("{}: field '{}' has an empty name", self.name, field.logical));
            }
            if !logical.insert(field.logical) {
                return Err(format!("{}: duplicate logical name '{}'", self.name, field.logical));
            }
            if !wire.insert(field.wire) {
                return Err(format!("{}: duplicate wire name '{}'", self.name, field.wire));
            }
            if !document.insert(field.document) {
                return Err(format!(
                    "{}: duplicate document name '{}'",
                    self.name, field.document
                ));
            }
        }

        Ok(())
    }

    /// Returns the logical names of fields whose wire and document names differ
    pub fn divergent_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.wire != f.document)
            .map(|f| f.logical)
            .collect()
    }
}
