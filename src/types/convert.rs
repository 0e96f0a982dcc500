//! Native value → canonical value.
//!
//! Both entry points are total: anything that cannot be normalized ends up
//! as `UNDEFINED` instead of failing, so rendering unexpected data in a
//! report can never itself break a test run.

use std::collections::BTreeSet;

use tracing::trace;

use crate::entity::{DbNode, DbPath, DbRelationship};
use crate::model::{IsoDuration, Value};
use crate::{Error, Result};
use super::{Content, DbDuration, DbPoint, DbValue, ValueType};

/// Kind a native value converts to.
///
/// Agrees with `convert(value).value_type()` for every input, including
/// values that degrade during normalization.
pub fn classify(value: &Value) -> ValueType {
    match value {
        Value::Null => ValueType::Null,
        Value::Bool(_) => ValueType::Boolean,
        Value::Int(_) => ValueType::Integer,
        Value::Float(_) => ValueType::Float,
        Value::String(_) => ValueType::String,
        Value::Bytes(_) => ValueType::Bytes,
        Value::List(_) => ValueType::List,
        Value::Map(_) => ValueType::Map,
        Value::Node(_) => ValueType::Node,
        Value::Relationship(_) => ValueType::Relationship,
        Value::Path(_) => ValueType::Path,
        Value::Date(_) => ValueType::Date,
        Value::Time(t) if t.offset().is_none() => ValueType::Undefined,
        Value::Time(_) => ValueType::Time,
        Value::LocalTime(_) => ValueType::LocalTime,
        Value::DateTime(_) => ValueType::DateTime,
        Value::LocalDateTime(_) => ValueType::LocalDateTime,
        Value::Duration(d) if normalize_duration(d).is_none() => ValueType::Undefined,
        Value::Duration(_) => ValueType::Duration,
        Value::Point2D { srid, x, y } if DbPoint::new(*srid, *x, *y, None).is_none() => ValueType::Undefined,
        Value::Point3D { srid, x, y, z } if DbPoint::new(*srid, *x, *y, Some(*z)).is_none() => ValueType::Undefined,
        Value::Point2D { .. } | Value::Point3D { .. } => ValueType::Point,
        Value::Foreign { .. } => ValueType::Undefined,
    }
}

/// The single conversion entry point.
pub fn convert(value: &Value) -> DbValue {
    let content = match value {
        Value::Null => Content::Null,
        Value::Bool(b) => Content::Boolean(*b),
        Value::Int(i) => Content::Integer(*i),
        Value::Float(f) => Content::Float(*f),
        Value::String(s) => Content::String(s.clone()),
        Value::Bytes(b) => Content::Bytes(b.clone()),
        Value::List(items) => Content::List(items.iter().map(convert).collect()),
        Value::Map(entries) => Content::Map(
            entries.iter().map(|(k, v)| (k.clone(), convert(v))).collect(),
        ),
        Value::Node(node) => Content::Node(Box::new(DbNode::from(node.as_ref()))),
        Value::Relationship(rel) => {
            Content::Relationship(Box::new(DbRelationship::from(rel.as_ref())))
        }
        Value::Path(path) => Content::Path(Box::new(DbPath::from(path.as_ref()))),
        Value::Date(d) => Content::Date(*d),
        Value::Time(t) => match t.offset() {
            Some(_) => Content::Time(*t),
            None => undefined("OffsetTime", format!("{}{:+}s", t.time, t.offset_seconds)),
        },
        Value::LocalTime(t) => Content::LocalTime(*t),
        Value::DateTime(dt) => Content::DateTime(*dt),
        Value::LocalDateTime(dt) => Content::LocalDateTime(*dt),
        Value::Duration(d) => match normalize_duration(d) {
            Some(normalized) => Content::Duration(normalized),
            None => undefined("IsoDuration", format!("{d:?}")),
        },
        Value::Point2D { srid, x, y } => match DbPoint::new(*srid, *x, *y, None) {
            Some(p) => Content::Point(p),
            None => undefined("Point2D", format!("srid={srid}, x={x}, y={y}")),
        },
        Value::Point3D { srid, x, y, z } => match DbPoint::new(*srid, *x, *y, Some(*z)) {
            Some(p) => Content::Point(p),
            None => undefined("Point3D", format!("srid={srid}, x={x}, y={y}, z={z}")),
        },
        Value::Foreign { type_name, text } => undefined(type_name, text.clone()),
    };
    DbValue::new(content)
}

/// Distinct kinds of the elements of a `LIST` value.
///
/// An empty list yields an empty set.
pub fn element_types(value: &DbValue) -> Result<BTreeSet<ValueType>> {
    match value.content() {
        Content::List(items) => Ok(items.iter().map(DbValue::value_type).collect()),
        _ => Err(Error::TypeError {
            expected: ValueType::List.to_string(),
            got: value.value_type().to_string(),
        }),
    }
}

/// Element kinds of a list that is not homogeneously of `expected`.
///
/// `None` when the list is empty or every element is `expected`, and for
/// non-list values (which are a type mismatch, not a list violation).
pub fn list_violation(value: &DbValue, expected: ValueType) -> Option<BTreeSet<ValueType>> {
    let kinds = element_types(value).ok()?;
    if kinds.iter().all(|k| *k == expected) {
        None
    } else {
        Some(kinds)
    }
}

fn normalize_duration(d: &IsoDuration) -> Option<DbDuration> {
    DbDuration::normalize(d.months, d.days, d.seconds, i64::from(d.nanoseconds))
}

fn undefined(type_name: &str, text: String) -> Content {
    trace!(type_name, %text, "value degraded to UNDEFINED");
    Content::Undefined { type_name: type_name.to_owned(), text }
}
