//! # Representation
//!
//! Stable text for values and entities, at two verbosity levels. Used for
//! every value that ends up in a failure report.
//!
//! | Mode | Entity | Scalar |
//! |------|--------|--------|
//! | `Abbreviate` | `NODE{id=5}` | `INTEGER{42}` |
//! | `Full` | `NODE{id=5, labels=[A], properties={k=STRING{"v"}}}` | `INTEGER{42}` |
//!
//! Formatting never fails; values outside the catalog render as
//! `UNDEFINED{<text>}`.

mod scalar;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{display_id, DbNode, DbPath, DbRelationship, Missing};
use crate::model::Value;
use crate::types::{convert, Content, DbValue, ValueType};

/// Verbosity of a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Entities as kind and id only.
    #[default]
    Abbreviate,
    /// Entities with every field.
    Full,
}

/// Anything that has a stable textual form.
pub trait Represent {
    fn represent(&self, mode: Mode) -> String;
}

/// Render `value` in `mode`.
pub fn to_string<R: Represent + ?Sized>(value: &R, mode: Mode) -> String {
    value.represent(mode)
}

/// A mode bound once and applied to many values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Representation {
    mode: Mode,
}

impl Representation {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn abbreviated() -> Self {
        Self::new(Mode::Abbreviate)
    }

    pub fn full() -> Self {
        Self::new(Mode::Full)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn render<R: Represent + ?Sized>(&self, value: &R) -> String {
        value.represent(self.mode)
    }
}

// ============================================================================
// Canonical values
// ============================================================================

impl Represent for DbValue {
    fn represent(&self, mode: Mode) -> String {
        let body = match self.content() {
            Content::Node(node) => return node.represent(mode),
            Content::Relationship(rel) => return rel.represent(mode),
            Content::Path(path) => path_body(path, mode),
            Content::List(items) => list_body(items, mode),
            Content::Map(entries) => {
                let inner: Vec<String> = entries
                    .iter()
                    .map(|(k, v)| format!("{k}={}", v.represent(mode)))
                    .collect();
                format!("{{{}}}", inner.join(", "))
            }
            Content::Undefined { text, .. } => text.clone(),
            other => scalar::body(other),
        };
        tagged(self.value_type(), &body)
    }
}

impl fmt::Display for DbValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.represent(Mode::Full))
    }
}

/// Native values render through their canonical form.
impl Represent for Value {
    fn represent(&self, mode: Mode) -> String {
        convert(self).represent(mode)
    }
}

impl Represent for ValueType {
    fn represent(&self, _mode: Mode) -> String {
        self.name().to_owned()
    }
}

// ============================================================================
// Entities
// ============================================================================

impl Represent for DbNode {
    fn represent(&self, mode: Mode) -> String {
        let id = display_id(self.id());
        match mode {
            Mode::Abbreviate => format!("NODE{{id={id}}}"),
            Mode::Full => {
                let labels: Vec<&str> = self.labels().iter().map(String::as_str).collect();
                format!(
                    "NODE{{id={id}, labels=[{}], properties={}}}",
                    labels.join(", "),
                    properties_body(self.properties().iter(), mode),
                )
            }
        }
    }
}

impl Represent for DbRelationship {
    fn represent(&self, mode: Mode) -> String {
        let id = display_id(self.id());
        match mode {
            Mode::Abbreviate => format!("RELATIONSHIP{{id={id}}}"),
            Mode::Full => format!(
                "RELATIONSHIP{{id={id}, type={}, start={}, end={}, properties={}}}",
                self.relationship_type(),
                display_id(self.start_id()),
                display_id(self.end_id()),
                properties_body(self.properties().iter(), mode),
            ),
        }
    }
}

impl Represent for DbPath {
    fn represent(&self, mode: Mode) -> String {
        tagged(ValueType::Path, &path_body(self, mode))
    }
}

impl fmt::Display for DbNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.represent(Mode::Full))
    }
}

impl fmt::Display for DbRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.represent(Mode::Full))
    }
}

/// A `Missing` shows as its entity. The missing items belong in the
/// report details, not in the item line.
impl<E: Represent, D> Represent for Missing<E, D> {
    fn represent(&self, mode: Mode) -> String {
        self.entity().represent(mode)
    }
}

// ============================================================================
// Plain text and collections
// ============================================================================

/// Strings as bare text: they are labels, keys and types in reports.
impl Represent for str {
    fn represent(&self, _mode: Mode) -> String {
        self.to_owned()
    }
}

impl Represent for String {
    fn represent(&self, mode: Mode) -> String {
        self.as_str().represent(mode)
    }
}

impl<T: Represent> Represent for [T] {
    fn represent(&self, mode: Mode) -> String {
        let items: Vec<String> = self.iter().map(|v| v.represent(mode)).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Represent> Represent for Vec<T> {
    fn represent(&self, mode: Mode) -> String {
        self.as_slice().represent(mode)
    }
}

impl<T: Represent + ?Sized> Represent for &T {
    fn represent(&self, mode: Mode) -> String {
        (**self).represent(mode)
    }
}

impl<T: Represent> Represent for Option<T> {
    fn represent(&self, mode: Mode) -> String {
        match self {
            Some(v) => v.represent(mode),
            None => "null".to_owned(),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn tagged(kind: ValueType, body: &str) -> String {
    format!("{kind}{{{body}}}")
}

fn list_body(items: &[DbValue], mode: Mode) -> String {
    items.represent(mode)
}

fn path_body(path: &DbPath, mode: Mode) -> String {
    let mut parts = Vec::with_capacity(path.nodes().len() + path.relationships().len());
    let mut rels = path.relationships().iter();
    for node in path.nodes() {
        parts.push(node.represent(mode));
        if let Some(rel) = rels.next() {
            parts.push(rel.represent(mode));
        }
    }
    // Malformed paths may carry trailing relationships.
    parts.extend(rels.map(|r| r.represent(mode)));
    format!("[{}]", parts.join(", "))
}

fn properties_body<'a>(entries: impl Iterator<Item = (&'a str, &'a DbValue)>, mode: Mode) -> String {
    let inner: Vec<String> = entries
        .map(|(k, v)| format!("{k}={}", v.represent(mode)))
        .collect();
    format!("{{{}}}", inner.join(", "))
}
