//! Canonical relationship.

use crate::model::{Relationship, Value};
use crate::types::{convert, DbValue};
use super::properties::convert_properties;
use super::{DbEntity, DbProperties, EntityId, EntityKind};

/// An immutable relationship: optional id, type, endpoint ids, properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DbRelationship {
    id: Option<EntityId>,
    relationship_type: String,
    start_id: Option<EntityId>,
    end_id: Option<EntityId>,
    properties: DbProperties,
}

impl DbRelationship {
    pub fn builder(relationship_type: impl Into<String>) -> DbRelationshipBuilder {
        DbRelationshipBuilder {
            id: None,
            relationship_type: relationship_type.into(),
            start_id: None,
            end_id: None,
            properties: DbProperties::new(),
        }
    }

    /// A builder seeded with this relationship's fields.
    pub fn to_builder(&self) -> DbRelationshipBuilder {
        DbRelationshipBuilder {
            id: self.id,
            relationship_type: self.relationship_type.clone(),
            start_id: self.start_id,
            end_id: self.end_id,
            properties: self.properties.clone(),
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    pub fn relationship_type(&self) -> &str {
        &self.relationship_type
    }

    pub fn start_id(&self) -> Option<EntityId> {
        self.start_id
    }

    pub fn end_id(&self) -> Option<EntityId> {
        self.end_id
    }

    pub fn properties(&self) -> &DbProperties {
        &self.properties
    }
}

impl DbEntity for DbRelationship {
    const KIND: EntityKind = EntityKind::Relationship;

    fn id(&self) -> Option<EntityId> {
        DbRelationship::id(self)
    }

    fn properties(&self) -> &DbProperties {
        DbRelationship::properties(self)
    }
}

impl From<&Relationship> for DbRelationship {
    fn from(rel: &Relationship) -> Self {
        DbRelationship {
            id: rel.resolved_id(),
            relationship_type: rel.rel_type.clone(),
            start_id: rel.start.map(|n| n.0),
            end_id: rel.end.map(|n| n.0),
            properties: convert_properties(&rel.properties),
        }
    }
}

/// Builder for [`DbRelationship`].
#[derive(Debug, Clone)]
#[must_use]
pub struct DbRelationshipBuilder {
    id: Option<EntityId>,
    relationship_type: String,
    start_id: Option<EntityId>,
    end_id: Option<EntityId>,
    properties: DbProperties,
}

impl DbRelationshipBuilder {
    pub fn id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    pub fn relationship_type(mut self, relationship_type: impl Into<String>) -> Self {
        self.relationship_type = relationship_type.into();
        self
    }

    pub fn start(mut self, start_id: EntityId) -> Self {
        self.start_id = Some(start_id);
        self
    }

    pub fn end(mut self, end_id: EntityId) -> Self {
        self.end_id = Some(end_id);
        self
    }

    pub fn endpoints(self, start_id: EntityId, end_id: EntityId) -> Self {
        self.start(start_id).end(end_id)
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

    pub fn build(self) -> DbRelationship {
        DbRelationship {
            id: self.id,
            relationship_type: self.relationship_type,
            start_id: self.start_id,
            end_id: self.end_id,
            properties: self.properties,
        }
    }
}
