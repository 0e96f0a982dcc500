//! Canonical path, the content of `PATH` values.

use crate::model::Path;
use super::{DbNode, DbRelationship};

/// Alternating nodes and relationships. Not an entity: it has no id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DbPath {
    nodes: Vec<DbNode>,
    relationships: Vec<DbRelationship>,
}

impl DbPath {
    pub fn new(nodes: Vec<DbNode>, relationships: Vec<DbRelationship>) -> Self {
        Self { nodes, relationships }
    }

    pub fn nodes(&self) -> &[DbNode] {
        &self.nodes
    }

    pub fn relationships(&self) -> &[DbRelationship] {
        &self.relationships
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }
}

/// Unbound relationships take their endpoints from the nodes around them,
/// in traversal order.
impl From<&Path> for DbPath {
    fn from(path: &Path) -> Self {
        let nodes: Vec<DbNode> = path.nodes.iter().map(DbNode::from).collect();
        let relationships = path
            .relationships
            .iter()
            .enumerate()
            .map(|(i, rel)| {
                let converted = DbRelationship::from(rel);
                if rel.is_bound() {
                    return converted;
                }
                let (from, to) = (nodes.get(i), nodes.get(i + 1));
                let mut builder = converted.to_builder();
                if let (None, Some(id)) = (converted.start_id(), from.and_then(DbNode::id)) {
                    builder = builder.start(id);
                }
                if let (None, Some(id)) = (converted.end_id(), to.and_then(DbNode::id)) {
                    builder = builder.end(id);
                }
                builder.build()
            })
            .collect();
        DbPath { nodes, relationships }
    }
}
