//! Schema metadata for record types
//!
//! Records are declared with `record!`, which pairs each struct with a
//! static `RecordSchema` describing every field's logical name, wire name,
//! document name and semantic type.
//!
//! # Rules
//!
//! - Every field has exactly one name per projection
//! - Names are stored explicitly, never derived
//! - No optional fields: absence means the zero value
//! - No validation or derived fields

mod record;
mod timestamp;
mod types;

pub use record::{Field, Record};
pub use timestamp::{in_range, Timestamp, MAX_YEAR, MIN_YEAR};
pub(crate) use timestamp::format_rfc3339;
pub use types::{FieldDef, FieldType, Projection, RecordSchema, SchemaRef};
