//! Canonical typed values.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::entity::{DbNode, DbPath, DbRelationship};
use crate::model::{OffsetTime, Value};
use super::ValueType;

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Immutable `(type, content)` pair.
///
/// The only ways in are [`convert`](super::convert), [`DbValue::of`],
/// [`DbValue::null`] and the entity `From` impls, all of which derive the
/// type from the content, so the two never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DbValue {
    value_type: ValueType,
    content: Content,
}

/// Normalized content of a [`DbValue`]. One variant per [`ValueType`].
#[derive(Debug, Clone)]
pub enum Content {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(OffsetTime),
    LocalTime(NaiveTime),
    DateTime(DateTime<FixedOffset>),
    LocalDateTime(NaiveDateTime),
    Duration(DbDuration),
    Point(DbPoint),
    List(Vec<DbValue>),
    Map(BTreeMap<String, DbValue>),
    Node(Box<DbNode>),
    Relationship(Box<DbRelationship>),
    Path(Box<DbPath>),
    /// A value outside the catalog: its native type name and default text.
    Undefined { type_name: String, text: String },
}

impl Content {
    pub fn value_type(&self) -> ValueType {
        match self {
            Content::Null => ValueType::Null,
            Content::Boolean(_) => ValueType::Boolean,
            Content::Integer(_) => ValueType::Integer,
            Content::Float(_) => ValueType::Float,
            Content::String(_) => ValueType::String,
            Content::Bytes(_) => ValueType::Bytes,
            Content::Date(_) => ValueType::Date,
            Content::Time(_) => ValueType::Time,
            Content::LocalTime(_) => ValueType::LocalTime,
            Content::DateTime(_) => ValueType::DateTime,
            Content::LocalDateTime(_) => ValueType::LocalDateTime,
            Content::Duration(_) => ValueType::Duration,
            Content::Point(_) => ValueType::Point,
            Content::List(_) => ValueType::List,
            Content::Map(_) => ValueType::Map,
            Content::Node(_) => ValueType::Node,
            Content::Relationship(_) => ValueType::Relationship,
            Content::Path(_) => ValueType::Path,
            Content::Undefined { .. } => ValueType::Undefined,
        }
    }
}

// Floats compare by bit pattern and date-times by (local time, offset) so
// that equality stays an equivalence relation consistent with `Hash`.
impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Content::Null, Content::Null) => true,
            (Content::Boolean(a), Content::Boolean(b)) => a == b,
            (Content::Integer(a), Content::Integer(b)) => a == b,
            (Content::Float(a), Content::Float(b)) => a.to_bits() == b.to_bits(),
            (Content::String(a), Content::String(b)) => a == b,
            (Content::Bytes(a), Content::Bytes(b)) => a == b,
            (Content::Date(a), Content::Date(b)) => a == b,
            (Content::Time(a), Content::Time(b)) => a == b,
            (Content::LocalTime(a), Content::LocalTime(b)) => a == b,
            (Content::DateTime(a), Content::DateTime(b)) => {
                a.naive_local() == b.naive_local() && a.offset() == b.offset()
            }
            (Content::LocalDateTime(a), Content::LocalDateTime(b)) => a == b,
            (Content::Duration(a), Content::Duration(b)) => a == b,
            (Content::Point(a), Content::Point(b)) => a == b,
            (Content::List(a), Content::List(b)) => a == b,
            (Content::Map(a), Content::Map(b)) => a == b,
            (Content::Node(a), Content::Node(b)) => a == b,
            (Content::Relationship(a), Content::Relationship(b)) => a == b,
            (Content::Path(a), Content::Path(b)) => a == b,
            (
                Content::Undefined { type_name: ta, text: xa },
                Content::Undefined { type_name: tb, text: xb },
            ) => ta == tb && xa == xb,
            _ => false,
        }
    }
}

impl Eq for Content {}

impl Hash for Content {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Content::Null => {}
            Content::Boolean(b) => b.hash(state),
            Content::Integer(i) => i.hash(state),
            Content::Float(f) => f.to_bits().hash(state),
            Content::String(s) => s.hash(state),
            Content::Bytes(b) => b.hash(state),
            Content::Date(d) => d.hash(state),
            Content::Time(t) => t.hash(state),
            Content::LocalTime(t) => t.hash(state),
            Content::DateTime(dt) => {
                dt.naive_local().hash(state);
                dt.offset().local_minus_utc().hash(state);
            }
            Content::LocalDateTime(dt) => dt.hash(state),
            Content::Duration(d) => d.hash(state),
            Content::Point(p) => p.hash(state),
            Content::List(items) => items.hash(state),
            Content::Map(entries) => entries.hash(state),
            Content::Node(n) => n.hash(state),
            Content::Relationship(r) => r.hash(state),
            Content::Path(p) => p.hash(state),
            Content::Undefined { type_name, text } => {
                type_name.hash(state);
                text.hash(state);
            }
        }
    }
}

// ============================================================================
// Normalized records
// ============================================================================

/// Duration with `nanoseconds` always in `0..1_000_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DbDuration {
    months: i64,
    days: i64,
    seconds: i64,
    nanoseconds: u32,
}

impl DbDuration {
    /// Carries whole seconds out of `nanoseconds`. `None` on `i64` overflow.
    pub fn normalize(months: i64, days: i64, seconds: i64, nanoseconds: i64) -> Option<Self> {
        let total = i128::from(seconds) * NANOS_PER_SECOND + i128::from(nanoseconds);
        let seconds = i64::try_from(total.div_euclid(NANOS_PER_SECOND)).ok()?;
        let nanoseconds = u32::try_from(total.rem_euclid(NANOS_PER_SECOND)).ok()?;
        Some(Self { months, days, seconds, nanoseconds })
    }

    pub fn months(&self) -> i64 { self.months }
    pub fn days(&self) -> i64 { self.days }
    pub fn seconds(&self) -> i64 { self.seconds }
    pub fn nanoseconds(&self) -> u32 { self.nanoseconds }

    /// Seconds and nanoseconds folded into one signed nanosecond count.
    pub fn total_nanos(&self) -> i128 {
        i128::from(self.seconds) * NANOS_PER_SECOND + i128::from(self.nanoseconds)
    }
}

/// 2D or 3D point. Coordinates are always finite.
#[derive(Debug, Clone, Copy)]
pub struct DbPoint {
    srid: i32,
    x: f64,
    y: f64,
    z: Option<f64>,
}

impl DbPoint {
    /// `None` when any coordinate is NaN or infinite.
    pub fn new(srid: i32, x: f64, y: f64, z: Option<f64>) -> Option<Self> {
        let finite = x.is_finite() && y.is_finite() && z.is_none_or(f64::is_finite);
        finite.then_some(Self { srid, x, y, z })
    }

    pub fn srid(&self) -> i32 { self.srid }
    pub fn x(&self) -> f64 { self.x }
    pub fn y(&self) -> f64 { self.y }
    pub fn z(&self) -> Option<f64> { self.z }
    pub fn dimensions(&self) -> usize { if self.z.is_some() { 3 } else { 2 } }
}

impl PartialEq for DbPoint {
    fn eq(&self, other: &Self) -> bool {
        self.srid == other.srid
            && self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.map(f64::to_bits) == other.z.map(f64::to_bits)
    }
}

impl Eq for DbPoint {}

impl Hash for DbPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.srid.hash(state);
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.map(f64::to_bits).hash(state);
    }
}

// ============================================================================
// DbValue
// ============================================================================

impl DbValue {
    pub(crate) fn new(content: Content) -> Self {
        Self { value_type: content.value_type(), content }
    }

    pub fn null() -> Self {
        Self::new(Content::Null)
    }

    /// Convert anything that has a native representation.
    pub fn of(value: impl Into<Value>) -> Self {
        super::convert(&value.into())
    }

    pub fn value_type(&self) -> ValueType { self.value_type }
    pub fn content(&self) -> &Content { &self.content }
    pub fn into_content(self) -> Content { self.content }

    pub fn is_null(&self) -> bool { self.value_type == ValueType::Null }

    pub fn as_bool(&self) -> Option<bool> {
        match self.content { Content::Boolean(b) => Some(b), _ => None }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.content { Content::Integer(i) => Some(i), _ => None }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self.content { Content::Float(f) => Some(f), _ => None }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.content { Content::String(s) => Some(s), _ => None }
    }

    pub fn as_list(&self) -> Option<&[DbValue]> {
        match &self.content { Content::List(items) => Some(items), _ => None }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, DbValue>> {
        match &self.content { Content::Map(m) => Some(m), _ => None }
    }

    pub fn as_node(&self) -> Option<&DbNode> {
        match &self.content { Content::Node(n) => Some(n), _ => None }
    }

    pub fn as_relationship(&self) -> Option<&DbRelationship> {
        match &self.content { Content::Relationship(r) => Some(r), _ => None }
    }
}

impl From<DbNode> for DbValue {
    fn from(node: DbNode) -> Self { DbValue::new(Content::Node(Box::new(node))) }
}

impl From<DbRelationship> for DbValue {
    fn from(rel: DbRelationship) -> Self { DbValue::new(Content::Relationship(Box::new(rel))) }
}

impl From<DbPath> for DbValue {
    fn from(path: DbPath) -> Self { DbValue::new(Content::Path(Box::new(path))) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: &DbValue) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_duration_normalizes_negative_nanos() {
        let d = DbDuration::normalize(0, 0, 1, -1).unwrap();
        assert_eq!((d.seconds(), d.nanoseconds()), (0, 999_999_999));
        let d = DbDuration::normalize(0, 0, 0, 2_500_000_000).unwrap();
        assert_eq!((d.seconds(), d.nanoseconds()), (2, 500_000_000));
    }

    #[test]
    fn test_duration_overflow_is_rejected() {
        assert!(DbDuration::normalize(0, 0, i64::MAX, 1_000_000_000).is_none());
        assert!(DbDuration::normalize(0, 0, i64::MAX, 999_999_999).is_some());
    }

    #[test]
    fn test_point_rejects_non_finite() {
        assert!(DbPoint::new(4326, f64::NAN, 1.0, None).is_none());
        assert!(DbPoint::new(4326, 1.0, 1.0, Some(f64::INFINITY)).is_none());
        assert_eq!(DbPoint::new(7203, 1.0, 2.0, Some(3.0)).unwrap().dimensions(), 3);
    }

    #[test]
    fn test_nan_float_equals_itself() {
        let a = DbValue::of(f64::NAN);
        assert_eq!(a, a.clone());
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
    }

    #[test]
    fn test_signed_zero_is_distinct() {
        assert_ne!(DbValue::of(0.0), DbValue::of(-0.0));
    }

    #[test]
    fn test_datetime_equality_includes_offset() {
        let utc = DateTime::parse_from_rfc3339("2024-05-01T10:00:00+00:00").unwrap();
        let cet = DateTime::parse_from_rfc3339("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(utc, cet, "chrono compares instants");
        assert_ne!(DbValue::of(utc), DbValue::of(cet));
    }

    #[test]
    fn test_different_types_never_equal() {
        assert_ne!(DbValue::of(1), DbValue::of(1.0));
        assert_ne!(DbValue::of("1"), DbValue::of(1));
        assert_ne!(DbValue::null(), DbValue::of(0));
    }
}
