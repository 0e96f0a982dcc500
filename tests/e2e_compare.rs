//! End-to-end tests for comparison strategies, alone and composed.

use neo4j_testkit::compare::{find_missing, find_unexpected, same_elements};
use neo4j_testkit::{
    CompositeStrategy, Config, DbNode, DbRelationship, DbValue, Node, NodeComparisonStrategy,
    NodeId, RelId, Relationship, RelationshipComparisonStrategy, StandardEquality, Strategy, Value,
};

fn labelled(id: u64) -> DbNode {
    DbNode::builder().id(id).labels(["A", "B"]).property("x", 1).build()
}

// ============================================================================
// 1. Node strategies
// ============================================================================

#[test]
fn test_ignore_id_on_nodes() {
    let (a, b) = (labelled(10), labelled(20));
    assert!(NodeComparisonStrategy::new().ignoring_id().are_equal(&a, &b));
    assert!(!NodeComparisonStrategy::new().are_equal(&a, &b));
}

#[test]
fn test_property_order_does_not_matter() {
    let a = DbNode::builder().id(1).property("x", 1).property("y", 2).build();
    let b = DbNode::builder().id(1).property("y", 2).property("x", 1).build();
    assert!(NodeComparisonStrategy::new().are_equal(&a, &b));
    assert_eq!(a, b);
}

#[test]
fn test_ignored_properties_only_relax_named_keys() {
    let a = DbNode::builder().id(1).property("updated", 1).property("name", "a").build();
    let b = DbNode::builder().id(1).property("updated", 2).property("name", "a").build();
    let c = DbNode::builder().id(1).property("updated", 2).property("name", "b").build();

    let strategy = NodeComparisonStrategy::new().ignoring_properties(["updated"]);
    assert!(strategy.are_equal(&a, &b));
    assert!(!strategy.are_equal(&a, &c));
}

#[test]
fn test_converted_nodes_compare_like_built_ones() {
    let native = Node::new(NodeId(3)).with_labels(["B", "A"]).with_property("x", 1);
    assert_eq!(DbNode::from(&native), labelled(3));
}

// ============================================================================
// 2. Relationship strategies
// ============================================================================

#[test]
fn test_relationships_without_endpoints_are_equal() {
    let a = DbRelationship::builder("KNOWS").id(1).property("since", 2001).build();
    let b = DbRelationship::builder("KNOWS").id(1).property("since", 2001).build();
    assert_eq!(a.start_id(), None);
    assert_eq!(a.end_id(), None);
    assert!(RelationshipComparisonStrategy::new().are_equal(&a, &b));
}

#[test]
fn test_endpoints_are_always_compared() {
    let a = DbRelationship::builder("KNOWS").endpoints(1, 2).build();
    let b = DbRelationship::builder("KNOWS").endpoints(2, 1).build();
    let relaxed = RelationshipComparisonStrategy::new().ignoring_id().ignoring_type();
    assert!(!relaxed.are_equal(&a, &b));
}

#[test]
fn test_ignore_type() {
    let native = Relationship::new(RelId(9), NodeId(1), NodeId(2), "KNOWS");
    let a = DbRelationship::from(&native);
    let b = a.to_builder().relationship_type("LIKES").build();
    assert!(!RelationshipComparisonStrategy::new().are_equal(&a, &b));
    assert!(RelationshipComparisonStrategy::new().ignoring_type().are_equal(&a, &b));
}

// ============================================================================
// 3. Composite strategy
// ============================================================================

#[test]
fn test_composite_dispatches_by_kind() {
    let strategy = CompositeStrategy::new(
        NodeComparisonStrategy::new().ignoring_id(),
        RelationshipComparisonStrategy::new(),
    );
    let n1 = DbValue::from(labelled(1));
    let n2 = DbValue::from(labelled(2));
    let r1 = DbValue::from(DbRelationship::builder("A").id(1).build());
    let r2 = DbValue::from(DbRelationship::builder("A").id(2).build());

    assert!(strategy.are_equal(&n1, &n2));
    assert!(!strategy.are_equal(&r1, &r2));
    assert!(!strategy.are_equal(&n1, &r1));
    assert!(strategy.are_equal(&DbValue::of("x"), &DbValue::of("x")));
    assert!(!strategy.are_equal(&DbValue::of(1), &DbValue::of(1.0)));
}

#[test]
fn test_default_composite_is_strict() {
    let strategy: CompositeStrategy = CompositeStrategy::default();
    assert!(!strategy.are_equal(&DbValue::from(labelled(1)), &DbValue::from(labelled(2))));
    assert!(strategy.are_equal(&DbValue::from(labelled(1)), &DbValue::from(labelled(1))));
}

#[test]
fn test_composite_from_json_config() {
    let config = Config::from_json(r#"{"comparison": {"relationship": {"ignore_id": true}}}"#).unwrap();
    let strategy = config.composite_strategy();
    let r1 = DbValue::from(DbRelationship::builder("A").id(1).endpoints(1, 2).build());
    let r2 = DbValue::from(DbRelationship::builder("A").id(2).endpoints(1, 2).build());
    assert!(strategy.are_equal(&r1, &r2));
}

// ============================================================================
// 4. Collections
// ============================================================================

#[test]
fn test_unordered_collection_matching() {
    let actual = vec![labelled(1), labelled(2), DbNode::builder().id(3).label("C").build()];
    let expected = vec![
        DbNode::builder().id(30).label("C").build(),
        labelled(10),
        DbNode::builder().id(40).label("D").build(),
    ];
    let strategy = NodeComparisonStrategy::new().ignoring_id();

    let missing = find_missing(&actual, &expected, &strategy);
    assert_eq!(missing, vec![&expected[2]]);
    assert!(find_unexpected(&actual, &expected, &strategy).is_empty());
    assert!(!same_elements(&actual, &expected, &strategy));
    assert!(same_elements(&actual[..2], &[labelled(7), labelled(8)], &strategy));
}

#[test]
fn test_same_elements_counts_duplicates() {
    let values: Vec<DbValue> = [1, 1, 2].into_iter().map(DbValue::of).collect();
    let other: Vec<DbValue> = [1, 2, 2].into_iter().map(DbValue::of).collect();
    assert!(!same_elements(&values, &other, &StandardEquality));
    assert!(same_elements(&values, &values, &StandardEquality));
    assert_eq!(DbValue::of(Value::Null), DbValue::null());
}
