//! The closed catalog of value kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a [`DbValue`](super::DbValue).
///
/// Every native value maps to exactly one kind. Anything the catalog does
/// not cover is `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Boolean,
    Integer,
    Float,
    String,
    Bytes,
    Date,
    Time,
    LocalTime,
    DateTime,
    LocalDateTime,
    Duration,
    Point,
    List,
    Node,
    Relationship,
    Path,
    Map,
    Null,
    Undefined,
}

impl ValueType {
    pub const ALL: [ValueType; 19] = [
        ValueType::Boolean,
        ValueType::Integer,
        ValueType::Float,
        ValueType::String,
        ValueType::Bytes,
        ValueType::Date,
        ValueType::Time,
        ValueType::LocalTime,
        ValueType::DateTime,
        ValueType::LocalDateTime,
        ValueType::Duration,
        ValueType::Point,
        ValueType::List,
        ValueType::Node,
        ValueType::Relationship,
        ValueType::Path,
        ValueType::Map,
        ValueType::Null,
        ValueType::Undefined,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ValueType::Boolean => "BOOLEAN",
            ValueType::Integer => "INTEGER",
            ValueType::Float => "FLOAT",
            ValueType::String => "STRING",
            ValueType::Bytes => "BYTES",
            ValueType::Date => "DATE",
            ValueType::Time => "TIME",
            ValueType::LocalTime => "LOCAL_TIME",
            ValueType::DateTime => "DATE_TIME",
            ValueType::LocalDateTime => "LOCAL_DATE_TIME",
            ValueType::Duration => "DURATION",
            ValueType::Point => "POINT",
            ValueType::List => "LIST",
            ValueType::Node => "NODE",
            ValueType::Relationship => "RELATIONSHIP",
            ValueType::Path => "PATH",
            ValueType::Map => "MAP",
            ValueType::Null => "NULL",
            ValueType::Undefined => "UNDEFINED",
        }
    }

    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            ValueType::Date
                | ValueType::Time
                | ValueType::LocalTime
                | ValueType::DateTime
                | ValueType::LocalDateTime
                | ValueType::Duration
        )
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ValueType::Integer | ValueType::Float)
    }

    /// Kinds whose content is a graph element.
    pub fn is_graph(self) -> bool {
        matches!(self, ValueType::Node | ValueType::Relationship | ValueType::Path)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
