//! End-to-end tests for grouped failure reports and the bulk checks.

use neo4j_testkit::config::ReportConfig;
use neo4j_testkit::report::Segment;
use neo4j_testkit::{
    Checks, DbNode, DbRelationship, DbValue, Detail, EntityKind, Error, GroupingErrorFactory,
    Header, Mode, Noun, Represent, ValueType,
};
use pretty_assertions::assert_eq;

fn nodes(ids: &[u64]) -> Vec<DbNode> {
    ids.iter().map(|id| DbNode::builder().id(*id).label("Person").build()).collect()
}

// ============================================================================
// 1. Ordering
// ============================================================================

#[test]
fn test_failing_items_in_ascending_id_order() {
    let actual = nodes(&[5, 1, 3]);
    let header = Header::from_template("Expecting %3 %1 to have label %4 but %2 did not");

    for failing in [nodes(&[5, 3]), nodes(&[3, 5])] {
        let message = GroupingErrorFactory::new(&actual, EntityKind::Node)
            .unwrap()
            .with_modes(Mode::Abbreviate, Mode::Abbreviate)
            .build(&failing, |_| [Detail::included("labels", "[Person]")], &header, &["Admin".into()])
            .unwrap();

        assert_eq!(
            message.text(),
            "Expecting nodes [NODE{id=1}, NODE{id=3}, NODE{id=5}] to have label Admin but [NODE{id=3}, NODE{id=5}] did not\n\
             1) NODE{id=3}\n  - labels: [Person]\n\n\
             2) NODE{id=5}\n  - labels: [Person]"
        );
    }
}

#[test]
fn test_template_parses_into_segments() {
    let header = Header::from_template("%3: %1, 100%% of %4");
    assert_eq!(
        header.segments(),
        &[
            Segment::Noun,
            Segment::Text(": ".into()),
            Segment::Actual,
            Segment::Text(", 100% of ".into()),
            Segment::Arg(0),
        ]
    );
}

// ============================================================================
// 2. Values and custom nouns
// ============================================================================

#[test]
fn test_report_over_values() {
    let actual = vec![DbValue::of(1), DbValue::of("two"), DbValue::of(3.0)];
    let failing: Vec<&DbValue> = actual.iter().filter(|v| v.value_type() != ValueType::Integer).collect();
    let header = Header::new()
        .text("Expecting all ")
        .noun()
        .text(" to be INTEGER but found ")
        .details("type");

    let message = GroupingErrorFactory::new(&actual, Noun::values())
        .unwrap()
        .build(
            &failing,
            |v| {
                vec![
                    Detail::excluded("type", v.value_type().to_string()),
                    Detail::included("value", v.represent(Mode::Full)),
                ]
            },
            &header,
            &[],
        )
        .unwrap();

    assert_eq!(
        message.text(),
        "Expecting all values to be INTEGER but found STRING, FLOAT\n\
         1) STRING{\"two\"}\n  - value: STRING{\"two\"}\n\n\
         2) FLOAT{3 (f64)}\n  - value: FLOAT{3 (f64)}"
    );
}

#[test]
fn test_empty_actual_is_rejected() {
    let err = GroupingErrorFactory::new(&Vec::<DbRelationship>::new(), EntityKind::Relationship).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

// ============================================================================
// 3. Bulk checks
// ============================================================================

#[test]
fn test_labels_check_with_abbreviated_items() {
    let checks = Checks::new(ReportConfig { collection_mode: Mode::Abbreviate, item_mode: Mode::Abbreviate });
    let actual = vec![
        DbNode::builder().id(5).label("Person").build(),
        DbNode::builder().id(1).labels(["Person", "Admin"]).build(),
        DbNode::builder().id(3).build(),
    ];

    let message = checks.nodes_have_labels(&actual, ["Person", "Admin"]).unwrap().unwrap();

    assert_eq!(
        message.text(),
        "Expecting nodes:\n  [NODE{id=1}, NODE{id=3}, NODE{id=5}]\n\
         to have all the following labels:\n  [Person, Admin]\n\
         but some labels were missing on:\n  [NODE{id=3}, NODE{id=5}]\n\
         1) NODE{id=3}\n  - missing labels: [Person, Admin]\n\n\
         2) NODE{id=5}\n  - missing labels: [Admin]"
    );
}

#[test]
fn test_checks_pass_quietly() {
    let checks = Checks::default();
    let actual = vec![DbNode::builder().id(1).label("A").property("k", 1).build()];

    assert_eq!(checks.nodes_have_labels(&actual, ["A"]).unwrap(), None);
    assert_eq!(checks.have_property_keys(&actual, ["k"]).unwrap(), None);
    assert_eq!(checks.have_property_type(&actual, "k", ValueType::Integer).unwrap(), None);
    assert_eq!(checks.have_property_value(&actual, "k", 1).unwrap(), None);
}

#[test]
fn test_relationship_checks() {
    let rels = vec![
        DbRelationship::builder("KNOWS").id(2).endpoints(1, 2).property("since", "2001").build(),
        DbRelationship::builder("KNOWS").id(1).endpoints(2, 3).property("since", 1999).build(),
    ];
    let checks = Checks::default();

    assert_eq!(checks.relationships_have_type(&rels, "KNOWS").unwrap(), None);

    let message = checks.have_property_type(&rels, "since", ValueType::Integer).unwrap().unwrap();
    assert_eq!(message.items().len(), 1);
    assert_eq!(
        message.items()[0].render(),
        "1) RELATIONSHIP{id=2, type=KNOWS, start=1, end=2, properties={since=STRING{\"2001\"}}}\n  - actual type: STRING"
    );
}

#[test]
fn test_message_display_matches_text() {
    let actual = nodes(&[1]);
    let message = Checks::default().have_property_keys(&actual, ["name"]).unwrap().unwrap();
    assert_eq!(message.to_string(), message.text());
    assert!(message.header().starts_with("Expecting node:\n"));
}
