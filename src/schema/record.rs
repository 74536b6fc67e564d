//! Record declarations
//!
//! `record!` declares a record struct and its field table in one place. For
//! each field it emits the serde wire rename and a `FieldDef` row carrying
//! the same wire name plus the document name, so the struct and the table
//! cannot disagree.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::timestamp::Timestamp;
use super::types::{FieldType, RecordSchema};

/// A record type with a static field table.
///
/// `Default` is the all-zero instance: absent fields decode to it.
pub trait Record: Serialize + DeserializeOwned + Default {
    /// Returns the field table of this record type
    fn schema() -> &'static RecordSchema;
}

/// Maps a Rust field type to its semantic `FieldType`.
pub trait Field {
    const TYPE: FieldType;
}

impl Field for String {
    const TYPE: FieldType = FieldType::String;
}

impl Field for i64 {
    const TYPE: FieldType = FieldType::Int;
}

impl Field for bool {
    const TYPE: FieldType = FieldType::Bool;
}

impl Field for Timestamp {
    const TYPE: FieldType = FieldType::Timestamp;
}

impl<T: Record> Field for Vec<T> {
    const TYPE: FieldType = FieldType::Sequence(T::schema);
}

/// Declares a record struct together with its `RecordSchema`.
///
/// ```ignore
/// record! {
///     /// A formation and how often it was used
///     pub struct Lineup as LINEUP_SCHEMA {
///         pub formation: String => "formation", "formation";
///         pub played: i64 => "played", "played";
///     }
/// }
/// ```
///
/// Each row is `pub <logical>: <type> => "<wire>", "<document>";`.
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $schema:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty => $wire:literal, $document:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire)]
                pub $field: $ty,
            )*
        }

        static $schema: $crate::schema::RecordSchema = $crate::schema::RecordSchema {
            name: stringify!($name),
            fields: &[
                $(
                    $crate::schema::FieldDef {
                        logical: stringify!($field),
                        wire: $wire,
                        document: $document,
                        field_type: <$ty as $crate::schema::Field>::TYPE,
                    },
                )*
            ],
        };

        impl $crate::schema::Record for $name {
            fn schema() -> &'static $crate::schema::RecordSchema {
                &$schema
            }
        }

        impl $crate::schema::Field for $name {
            const TYPE: $crate::schema::FieldType =
                $crate::schema::FieldType::Record(<$name as $crate::schema::Record>::schema);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Projection;

    crate::record! {
        /// Test-only record
        pub struct Sample as SAMPLE_SCHEMA {
            pub label: String => "label", "lbl";
            pub count: i64 => "count", "count";
            pub when: Timestamp => "when", "at";
        }
    }

    crate::record! {
        pub struct Holder as HOLDER_SCHEMA {
            pub sample: Sample => "sample", "sample_doc";
            pub samples: Vec<Sample> => "samples", "samples";
        }
    }

    #[test]
    fn test_macro_builds_table() {
        let schema = Sample::schema();
        assert_eq!(schema.name, "Sample");
        assert_eq!(schema.names(Projection::Wire), vec!["label", "count", "when"]);
        assert_eq!(schema.names(Projection::Document), vec!["lbl", "count", "at"]);
        assert_eq!(schema.field("when").unwrap().field_type.type_name(), "timestamp");
    }

    #[test]
    fn test_macro_nested_types() {
        let schema = Holder::schema();
        assert_eq!(schema.field("sample").unwrap().field_type.describe(), "Sample");
        assert_eq!(
            schema.field("samples").unwrap().field_type.describe(),
            "sequence<Sample>"
        );
    }

    #[test]
    fn test_macro_serde_uses_wire_names() {
        let value = serde_json::to_value(Sample::default()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 3);
        for name in Sample::schema().names(Projection::Wire) {
            assert!(keys.contains(&name));
        }
    }

    #[test]
    fn test_macro_container_default() {
        let decoded: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded, Holder::default());
        assert!(decoded.samples.is_empty());
        assert!(decoded.sample.when.is_zero());
    }
}
