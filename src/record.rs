//! Input record types: identifiers and the field-bag record shape.
//!
//! Records arrive as JSON-object-like values with two reserved fields
//! (`id`, `parent`); everything else is carried through the index verbatim
//! and never interpreted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Record identifier: either an integer or a string.
///
/// Equality and hashing are structural — same variant and same underlying
/// value. `Id::Int(1)` and `Id::Str("1")` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Str(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{n}"),
            Id::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Int(n)
    }
}

impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Id::Int(n.into())
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Str(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Str(s)
    }
}

/// One input record: a unique `id`, a `parent` reference, and arbitrary
/// additional fields passed through unchanged.
///
/// A `parent` value that matches no record's `id` marks the record as the
/// root. The extra fields are opaque to the index; they survive indexing
/// and serde round-trips byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Id,
    pub parent: Id,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Build a record with no extra fields.
    pub fn new(id: impl Into<Id>, parent: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            extra: Map::new(),
        }
    }

    /// Builder-style attachment of one extra field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
