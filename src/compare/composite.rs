//! Kind-dispatching strategy over canonical values.

use crate::entity::{DbNode, DbRelationship};
use crate::types::{Content, DbValue};
use super::{NodeComparisonStrategy, RelationshipComparisonStrategy, Strategy};

/// Node pairs go to `N`, relationship pairs to `R`, everything else to
/// plain equality. A node never equals a relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeStrategy<N = NodeComparisonStrategy, R = RelationshipComparisonStrategy> {
    node: N,
    relationship: R,
}

impl<N, R> CompositeStrategy<N, R>
where
    N: Strategy<DbNode>,
    R: Strategy<DbRelationship>,
{
    pub fn new(node: N, relationship: R) -> Self {
        Self { node, relationship }
    }

    pub fn node_strategy(&self) -> &N {
        &self.node
    }

    pub fn relationship_strategy(&self) -> &R {
        &self.relationship
    }
}

impl<N, R> Strategy<DbValue> for CompositeStrategy<N, R>
where
    N: Strategy<DbNode>,
    R: Strategy<DbRelationship>,
{
    fn are_equal(&self, a: &DbValue, b: &DbValue) -> bool {
        match (a.content(), b.content()) {
            (Content::Node(x), Content::Node(y)) => self.node.are_equal(x, y),
            (Content::Relationship(x), Content::Relationship(y)) => {
                self.relationship.are_equal(x, y)
            }
            _ => a == b,
        }
    }
}
