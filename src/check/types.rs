//! Type checks: property kinds, list element kinds and relationship types.

use crate::entity::{DbEntity, DbRelationship, Identified};
use crate::report::{Detail, ErrorMessage, Header};
use crate::repr::{Mode, Represent};
use crate::types::{element_types, list_violation, ValueType};
use crate::Result;
use super::{non_blank, Checks, ABSENT};

impl Checks {
    /// Every entity has property `key` of kind `value_type`. Entities
    /// lacking the key fail.
    pub fn have_property_type<E>(
        &self,
        entities: &[E],
        key: &str,
        value_type: ValueType,
    ) -> Result<Option<ErrorMessage>>
    where
        E: DbEntity + Identified + Represent,
    {
        non_blank(key, "property key")?;
        let failing: Vec<&E> = entities
            .iter()
            .filter(|entity| entity.property(key).map(|v| v.value_type()) != Some(value_type))
            .collect();

        let header = Header::new()
            .text("Expecting ")
            .noun()
            .text(":\n  ")
            .actual()
            .text("\nto have property ")
            .arg(0)
            .text(" of type:\n  ")
            .arg(1)
            .text("\nbut some ")
            .failing_noun()
            .text(" did not:\n  ")
            .failing();

        self.report(
            entities,
            &failing,
            |entity| [Detail::included("actual type", kind_of(*entity, key))],
            &header,
            &[key.to_owned(), value_type.to_string()],
        )
    }

    /// Every entity has property `key` holding a list whose elements are
    /// all of kind `element_type`. An empty list passes.
    pub fn have_list_property_of<E>(
        &self,
        entities: &[E],
        key: &str,
        element_type: ValueType,
    ) -> Result<Option<ErrorMessage>>
    where
        E: DbEntity + Identified + Represent,
    {
        non_blank(key, "property key")?;
        let failing: Vec<&E> = entities
            .iter()
            .filter(|entity| match entity.property(key) {
                Some(value) if value.value_type() == ValueType::List => {
                    list_violation(value, element_type).is_some()
                }
                _ => true,
            })
            .collect();

        let header = Header::new()
            .text("Expecting ")
            .noun()
            .text(":\n  ")
            .actual()
            .text("\nto have list property ")
            .arg(0)
            .text(" with elements of type:\n  ")
            .arg(1)
            .text("\nbut some ")
            .failing_noun()
            .text(" did not:\n  ")
            .failing();

        self.report(
            entities,
            &failing,
            |entity| {
                let detail = match entity.property(key).map(element_types) {
                    Some(Ok(kinds)) => {
                        let kinds: Vec<ValueType> = kinds.into_iter().collect();
                        Detail::included("element types", kinds.represent(Mode::Abbreviate))
                    }
                    _ => Detail::included("actual type", kind_of(*entity, key)),
                };
                [detail]
            },
            &header,
            &[key.to_owned(), element_type.to_string()],
        )
    }

    /// Every relationship is of type `rel_type`.
    pub fn relationships_have_type(
        &self,
        relationships: &[DbRelationship],
        rel_type: &str,
    ) -> Result<Option<ErrorMessage>> {
        non_blank(rel_type, "relationship type")?;
        let failing: Vec<&DbRelationship> = relationships
            .iter()
            .filter(|rel| rel.relationship_type() != rel_type)
            .collect();

        let header = Header::new()
            .text("Expecting ")
            .noun()
            .text(":\n  ")
            .actual()
            .text("\nto have type:\n  ")
            .arg(0)
            .text("\nbut some ")
            .failing_noun()
            .text(" did not:\n  ")
            .failing();

        self.report(
            relationships,
            &failing,
            |rel| [Detail::included("actual type", rel.relationship_type())],
            &header,
            &[rel_type.to_owned()],
        )
    }
}

fn kind_of<E: DbEntity>(entity: &E, key: &str) -> String {
    entity
        .property(key)
        .map_or_else(|| ABSENT.to_owned(), |v| v.value_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::DbNode;
    use crate::model::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_property_type() {
        let nodes = vec![
            DbNode::builder().id(3).property("age", "old").build(),
            DbNode::builder().id(1).property("age", 36).build(),
            DbNode::builder().id(2).build(),
        ];
        let message = Checks::default()
            .have_property_type(&nodes, "age", ValueType::Integer)
            .unwrap()
            .unwrap();

        assert_eq!(
            message.text(),
            "Expecting nodes:\n  [NODE{id=1}, NODE{id=2}, NODE{id=3}]\n\
             to have property age of type:\n  INTEGER\n\
             but some nodes did not:\n  [NODE{id=2}, NODE{id=3}]\n\
             1) NODE{id=2, labels=[], properties={}}\n  - actual type: <absent>\n\n\
             2) NODE{id=3, labels=[], properties={age=STRING{\"old\"}}}\n  - actual type: STRING"
        );
    }

    #[test]
    fn test_property_type_passes() {
        let nodes = vec![DbNode::builder().id(1).property("score", 1.5).build()];
        assert_eq!(
            Checks::default().have_property_type(&nodes, "score", ValueType::Float).unwrap(),
            None
        );
    }

    #[test]
    fn test_list_property_of() {
        let nodes = vec![
            DbNode::builder().id(1).property("tags", vec!["a", "b"]).build(),
            DbNode::builder().id(2).property("tags", Value::List(Vec::new())).build(),
            DbNode::builder().id(3).property("tags", Value::List(vec![Value::from("a"), Value::from(1)])).build(),
            DbNode::builder().id(4).property("tags", "a").build(),
        ];
        let message = Checks::default()
            .have_list_property_of(&nodes, "tags", ValueType::String)
            .unwrap()
            .unwrap();

        let details: Vec<(&str, &str)> = message
            .items()
            .iter()
            .flat_map(|item| item.details())
            .map(|d| (d.title(), d.value()))
            .collect();
        assert_eq!(
            details,
            vec![("element types", "[INTEGER, STRING]"), ("actual type", "STRING")]
        );
    }

    #[test]
    fn test_relationships_have_type() {
        let rels = vec![
            DbRelationship::builder("KNOWS").id(1).endpoints(1, 2).build(),
            DbRelationship::builder("LIKES").id(2).endpoints(2, 1).build(),
        ];
        let message = Checks::default().relationships_have_type(&rels, "KNOWS").unwrap().unwrap();

        assert_eq!(
            message.text(),
            "Expecting relationships:\n  [RELATIONSHIP{id=1}, RELATIONSHIP{id=2}]\n\
             to have type:\n  KNOWS\n\
             but some relationship did not:\n  [RELATIONSHIP{id=2}]\n\
             1) RELATIONSHIP{id=2, type=LIKES, start=2, end=1, properties={}}\n  - actual type: LIKES"
        );
    }
}
