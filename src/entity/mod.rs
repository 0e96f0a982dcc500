//! # Entity Model
//!
//! Immutable node and relationship records holding canonical values.
//! Built through plain builders or converted from the native records in
//! [`crate::model`]; never mutated afterwards.

pub mod properties;
pub mod node;
pub mod relationship;
pub mod path;
pub mod missing;

use std::fmt;

use crate::types::DbValue;
use crate::{Error, Result};

pub use properties::DbProperties;
pub use node::{DbNode, DbNodeBuilder};
pub use relationship::{DbRelationship, DbRelationshipBuilder};
pub use path::DbPath;
pub use missing::Missing;

/// Database identifier of a node or relationship.
pub type EntityId = u64;

/// Which kind of graph element an entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Node,
    Relationship,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Node => "NODE",
            EntityKind::Relationship => "RELATIONSHIP",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Node => "node",
            EntityKind::Relationship => "relationship",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Node => "nodes",
            EntityKind::Relationship => "relationships",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Behaviour shared by nodes and relationships.
pub trait DbEntity: fmt::Debug + Clone + PartialEq + Send + Sync {
    const KIND: EntityKind;

    fn id(&self) -> Option<EntityId>;

    fn properties(&self) -> &DbProperties;

    fn property(&self, key: &str) -> Option<&DbValue> {
        self.properties().get(key)
    }

    fn has_property(&self, key: &str) -> bool {
        self.properties().contains_key(key)
    }

    /// Like [`property`](DbEntity::property), for callers that already
    /// know the key must be there.
    fn required_property(&self, key: &str) -> Result<&DbValue> {
        self.property(key).ok_or_else(|| Error::UnknownProperty {
            key: key.to_owned(),
            entity: format!("{}{{id={}}}", Self::KIND, display_id(self.id())),
        })
    }
}

/// Sort key used to order reports: ascending id, absent ids first.
pub trait Identified {
    fn sort_id(&self) -> Option<EntityId>;
}

impl Identified for DbNode {
    fn sort_id(&self) -> Option<EntityId> { self.id() }
}

impl Identified for DbRelationship {
    fn sort_id(&self) -> Option<EntityId> { self.id() }
}

/// Entity contents sort by their id; every other value has none.
impl Identified for DbValue {
    fn sort_id(&self) -> Option<EntityId> {
        self.as_node()
            .map(DbNode::id)
            .or_else(|| self.as_relationship().map(DbRelationship::id))
            .flatten()
    }
}

impl<E: Identified, D> Identified for Missing<E, D> {
    fn sort_id(&self) -> Option<EntityId> { self.entity().sort_id() }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn sort_id(&self) -> Option<EntityId> { (**self).sort_id() }
}

pub(crate) fn display_id(id: Option<EntityId>) -> String {
    id.map_or_else(|| "null".to_owned(), |id| id.to_string())
}
