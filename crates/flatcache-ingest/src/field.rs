//! Scalar field types inferred during import.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar type of a field, as inferred from every value seen in its column.
///
/// Types are ordered by generality: `Integer` < `Float` < `String`. A field
/// only ever moves towards `String`, which is terminal. `Unknown` is the
/// pre-initial state a field holds before any value has been observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[default]
    #[serde(rename = "FIELD_TYPE_UNKNOWN")]
    Unknown,
    #[serde(rename = "FIELD_TYPE_INTEGER")]
    Integer,
    #[serde(rename = "FIELD_TYPE_FLOAT")]
    Float,
    #[serde(rename = "FIELD_TYPE_STRING")]
    String,
}

impl FieldType {
    /// All field types, in widening order.
    pub const ALL: [FieldType; 4] = [
        FieldType::Unknown,
        FieldType::Integer,
        FieldType::Float,
        FieldType::String,
    ];

    /// Returns the tag used when logging or serializing the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Unknown => "FIELD_TYPE_UNKNOWN",
            FieldType::Integer => "FIELD_TYPE_INTEGER",
            FieldType::Float => "FIELD_TYPE_FLOAT",
            FieldType::String => "FIELD_TYPE_STRING",
        }
    }

    /// Position in the widening order. `Unknown` sorts before everything.
    pub fn rank(&self) -> u8 {
        match self {
            FieldType::Unknown => 0,
            FieldType::Integer => 1,
            FieldType::Float => 2,
            FieldType::String => 3,
        }
    }

    /// Returns true once no further observation can change the type.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FieldType::String)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
