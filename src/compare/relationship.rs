//! Relationship equivalence with optional id, type and property relaxation.

use hashbrown::HashSet;
use tracing::trace;

use crate::entity::DbRelationship;
use super::Strategy;

/// Like [`NodeComparisonStrategy`](super::NodeComparisonStrategy), with the
/// relationship type optionally ignored. Start and end ids are always
/// compared; two absent endpoints match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipComparisonStrategy {
    ignore_id: bool,
    ignore_type: bool,
    ignored_properties: HashSet<String>,
}

impl RelationshipComparisonStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ignoring_id(mut self) -> Self {
        self.ignore_id = true;
        self
    }

    #[must_use]
    pub fn ignoring_type(mut self) -> Self {
        self.ignore_type = true;
        self
    }

    #[must_use]
    pub fn ignoring_properties(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignored_properties.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn ignores_id(&self) -> bool {
        self.ignore_id
    }

    pub fn ignores_type(&self) -> bool {
        self.ignore_type
    }

    pub fn ignored_properties(&self) -> &HashSet<String> {
        &self.ignored_properties
    }
}

impl Strategy<DbRelationship> for RelationshipComparisonStrategy {
    fn are_equal(&self, a: &DbRelationship, b: &DbRelationship) -> bool {
        if !self.ignore_id && a.id() != b.id() {
            trace!(left = ?a.id(), right = ?b.id(), "relationships differ by id");
            return false;
        }
        if !self.ignore_type && a.relationship_type() != b.relationship_type() {
            trace!(
                left = a.relationship_type(),
                right = b.relationship_type(),
                "relationships differ by type"
            );
            return false;
        }
        if a.start_id() != b.start_id() || a.end_id() != b.end_id() {
            trace!(left = ?a.id(), right = ?b.id(), "relationships differ by endpoints");
            return false;
        }
        let equal = a
            .properties()
            .equals_ignoring(b.properties(), |k| self.ignored_properties.contains(k));
        if !equal {
            trace!(left = ?a.id(), right = ?b.id(), "relationships differ by properties");
        }
        equal
    }
}
