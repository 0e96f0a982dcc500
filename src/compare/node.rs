//! Node equivalence with optional id and property relaxation.

use hashbrown::HashSet;
use tracing::trace;

use crate::entity::DbNode;
use super::Strategy;

/// Two nodes are equal iff their ids match (unless ignored), their label
/// sets match and their properties match once `ignored_properties` are
/// dropped from both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeComparisonStrategy {
    ignore_id: bool,
    ignored_properties: HashSet<String>,
}

impl NodeComparisonStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ignoring_id(mut self) -> Self {
        self.ignore_id = true;
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

    pub fn ignored_properties(&self) -> &HashSet<String> {
        &self.ignored_properties
    }
}

impl Strategy<DbNode> for NodeComparisonStrategy {
    fn are_equal(&self, a: &DbNode, b: &DbNode) -> bool {
        if !self.ignore_id && a.id() != b.id() {
            trace!(left = ?a.id(), right = ?b.id(), "nodes differ by id");
            return false;
        }
        if a.labels() != b.labels() {
            trace!(left = ?a.labels(), right = ?b.labels(), "nodes differ by labels");
            return false;
        }
        let equal = a
            .properties()
            .equals_ignoring(b.properties(), |k| self.ignored_properties.contains(k));
        if !equal {
            trace!(left = ?a.id(), right = ?b.id(), "nodes differ by properties");
        }
        equal
    }
}
