//! Canonical node.

use std::collections::BTreeSet;

use crate::model::{Node, Value};
use crate::types::{convert, DbValue};
use super::properties::convert_properties;
use super::{DbEntity, DbProperties, EntityId, EntityKind};

/// An immutable node: optional id, label set, properties.
///
/// Labels are a set: order never matters for equality and they are always
/// listed sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DbNode {
    id: Option<EntityId>,
    labels: BTreeSet<String>,
    properties: DbProperties,
}

impl DbNode {
    pub fn builder() -> DbNodeBuilder {
        DbNodeBuilder::default()
    }

    /// A builder seeded with this node's fields.
    pub fn to_builder(&self) -> DbNodeBuilder {
        DbNodeBuilder {
            id: self.id,
            labels: self.labels.clone(),
            properties: self.properties.clone(),
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn has_labels<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> bool {
        labels.into_iter().all(|l| self.has_label(l))
    }

    pub fn properties(&self) -> &DbProperties {
        &self.properties
    }
}

impl DbEntity for DbNode {
    const KIND: EntityKind = EntityKind::Node;

    fn id(&self) -> Option<EntityId> {
        DbNode::id(self)
    }

    fn properties(&self) -> &DbProperties {
        DbNode::properties(self)
    }
}

impl From<&Node> for DbNode {
    fn from(node: &Node) -> Self {
        DbNode {
            id: node.resolved_id(),
            labels: node.labels.iter().cloned().collect(),
            properties: convert_properties(&node.properties),
        }
    }
}

/// Builder for [`DbNode`]. Every call consumes and returns the builder.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct DbNodeBuilder {
    id: Option<EntityId>,
    labels: BTreeSet<String>,
    properties: DbProperties,
}

impl DbNodeBuilder {
    pub fn id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    pub fn labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Property from a native value, run through the classifier.
    pub fn property(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.value(key, convert(&value.into()))
    }

    pub fn value(mut self, key: impl Into<String>, value: DbValue) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn without_property(mut self, key: &str) -> Self {
        self.properties.remove(key);
        self
    }

    pub fn build(self) -> DbNode {
        DbNode {
            id: self.id,
            labels: self.labels,
            properties: self.properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeId;
    use crate::types::ValueType;

    #[test]
    fn test_builder() {
        let node = DbNode::builder()
            .id(10)
            .labels(["B", "A"])
            .property("x", 1)
            .property("name", "Ada")
            .build();

        assert_eq!(node.id(), Some(10));
        assert_eq!(node.labels().iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(node.property("x").map(DbValue::value_type), Some(ValueType::Integer));
        assert!(node.has_labels(["A", "B"]));
        assert!(!node.has_labels(["A", "C"]));
    }

    #[test]
    fn test_to_builder_leaves_original_untouched() {
        let original = DbNode::builder().id(1).label("A").property("x", 1).build();
        let derived = original.to_builder().without_id().without_property("x").label("B").build();

        assert_eq!(original.id(), Some(1));
        assert!(original.property("x").is_some());
        assert!(!original.has_label("B"));

        assert_eq!(derived.id(), None);
        assert!(derived.property("x").is_none());
        assert!(derived.has_labels(["A", "B"]));
    }

    #[test]
    fn test_label_order_is_irrelevant() {
        let a = DbNode::builder().labels(["A", "B"]).build();
        let b = DbNode::builder().labels(["B", "A", "A"]).build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_native_node() {
        let native = Node::new(NodeId(7)).with_labels(["Person"]).with_property("age", 42);
        let node = DbNode::from(&native);
        assert_eq!(node.id(), Some(7));
        assert!(node.has_label("Person"));
        assert_eq!(node.property("age"), Some(&DbValue::of(42)));
    }
}
