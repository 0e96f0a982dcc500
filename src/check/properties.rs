//! Property presence and value checks.

use crate::entity::{DbEntity, Identified, Missing};
use crate::model::Value;
use crate::report::{Detail, ErrorMessage, Header};
use crate::repr::{Mode, Represent};
use crate::types::DbValue;
use crate::Result;
use super::{non_blank, non_empty, Checks, ABSENT};

impl Checks {
    /// Every entity carries all of the property `keys`.
    pub fn have_property_keys<E>(
        &self,
        entities: &[E],
        keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Option<ErrorMessage>>
    where
        E: DbEntity + Identified + Represent,
    {
        let expected = non_empty(keys, "property keys")?;
        let missing = Missing::collect(entities, &expected, |entity, key| entity.has_property(key));

        let header = Header::new()
            .text("Expecting ")
            .noun()
            .text(":\n  ")
            .actual()
            .text("\nto have all the following property keys:\n  ")
            .arg(0)
            .text("\nbut some property keys were missing on:\n  ")
            .failing();

        self.report(
            entities,
            &missing,
            |m| [Detail::included("missing keys", m.items().represent(Mode::Abbreviate))],
            &header,
            &[expected.represent(Mode::Abbreviate)],
        )
    }

    /// Every entity has property `key` equal to `expected`.
    pub fn have_property_value<E>(
        &self,
        entities: &[E],
        key: &str,
        expected: impl Into<Value>,
    ) -> Result<Option<ErrorMessage>>
    where
        E: DbEntity + Identified + Represent,
    {
        non_blank(key, "property key")?;
        let expected = DbValue::of(expected);
        let failing: Vec<&E> = entities
            .iter()
            .filter(|entity| entity.property(key) != Some(&expected))
            .collect();

        let header = Header::new()
            .text("Expecting ")
            .noun()
            .text(":\n  ")
            .actual()
            .text("\nto have property ")
            .arg(0)
            .text(" with value:\n  ")
            .arg(1)
            .text("\nbut some ")
            .failing_noun()
            .text(" did not:\n  ")
            .failing();

        self.report(
            entities,
            &failing,
            |entity| {
                let actual = entity
                    .property(key)
                    .map_or_else(|| ABSENT.to_owned(), |v| v.represent(Mode::Full));
                [Detail::included("actual value", actual)]
            },
            &header,
            &[key.to_owned(), expected.represent(Mode::Full)],
        )
    }
}
