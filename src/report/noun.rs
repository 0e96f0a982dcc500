//! Domain nouns with their plural.

use std::borrow::Cow;

use crate::entity::EntityKind;

/// What the reported items are called: "node"/"nodes", "value"/"values".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noun {
    singular: Cow<'static, str>,
    plural: Cow<'static, str>,
}

impl Noun {
    pub fn new(singular: impl Into<Cow<'static, str>>, plural: impl Into<Cow<'static, str>>) -> Self {
        Self { singular: singular.into(), plural: plural.into() }
    }

    pub fn values() -> Self {
        Self::new("value", "values")
    }

    /// Singular for exactly one, plural otherwise (including zero).
    pub fn for_count(&self, count: usize) -> &str {
        if count == 1 { self.singular.as_ref() } else { self.plural.as_ref() }
    }
}

impl From<EntityKind> for Noun {
    fn from(kind: EntityKind) -> Self {
        Noun::new(kind.singular(), kind.plural())
    }
}
