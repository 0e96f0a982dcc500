//! Graph records as a driver hands them over.
//!
//! Identity comes in two flavors: the legacy numeric id and the 5.x
//! element id (`"4:<database>:<n>"`). Either, both or neither may be
//! present; [`Node::resolved_id`] and friends pick whichever is usable.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};

/// Legacy numeric node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Legacy numeric relationship identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for RelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric part of an identity: the legacy id if given, else the last
/// `:`-separated segment of the element id when it is a number.
fn resolve(legacy: Option<u64>, element_id: Option<&str>) -> Option<u64> {
    legacy.or_else(|| element_id?.rsplit(':').next()?.parse().ok())
}

// ============================================================================
// Node
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    pub id: Option<NodeId>,
    pub element_id: Option<String>,
    pub labels: Vec<String>,
    pub properties: PropertyMap,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self { id: Some(id), ..Self::default() }
    }

    /// A node without identity, as produced by virtual-graph procedures.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn resolved_id(&self) -> Option<u64> {
        resolve(self.id.map(|id| id.0), self.element_id.as_deref())
    }
}

// ============================================================================
// Relationship
// ============================================================================

/// A relationship record. Inside paths, Bolt sends relationships
/// "unbound", without endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: Option<RelId>,
    pub element_id: Option<String>,
    pub start: Option<NodeId>,
    pub end: Option<NodeId>,
    pub rel_type: String,
    pub properties: PropertyMap,
}

impl Relationship {
    pub fn new(id: RelId, start: NodeId, end: NodeId, rel_type: impl Into<String>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::unbound(id, rel_type)
        }
    }

    pub fn unbound(id: RelId, rel_type: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            element_id: None,
            start: None,
            end: None,
            rel_type: rel_type.into(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn resolved_id(&self) -> Option<u64> {
        resolve(self.id.map(|id| id.0), self.element_id.as_deref())
    }

    pub fn is_bound(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

// ============================================================================
// Path
// ============================================================================

/// Alternating nodes and relationships: node -[rel]-> node -[rel]-> node ...
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<Node>,
    pub relationships: Vec<Relationship>,
}

impl Path {
    pub fn single(node: Node) -> Self {
        Self { nodes: vec![node], relationships: Vec::new() }
    }

    pub fn append(mut self, rel: Relationship, node: Node) -> Self {
        self.relationships.push(rel);
        self.nodes.push(node);
        self
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    pub fn start(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Each relationship with the nodes on either side of it, in path
    /// order. Stops early on a path with too few nodes.
    pub fn segments(&self) -> impl Iterator<Item = (&Node, &Relationship, &Node)> {
        self.relationships
            .iter()
            .zip(self.nodes.windows(2))
            .map(|(rel, pair)| (&pair[0], rel, &pair[1]))
    }
}
