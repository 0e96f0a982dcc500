//! Expected-but-absent items found by a bulk check.

use smallvec::SmallVec;

/// One entity paired with the expected items it lacks (label names,
/// property keys, ...). Lives only as long as the report it feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Missing<E, D> {
    entity: E,
    items: SmallVec<[D; 4]>,
}

impl<E, D> Missing<E, D> {
    pub fn new(entity: E, items: impl IntoIterator<Item = D>) -> Self {
        Self { entity, items: items.into_iter().collect() }
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn items(&self) -> &[D] {
        &self.items
    }

    pub fn into_parts(self) -> (E, Vec<D>) {
        (self.entity, self.items.into_vec())
    }
}

impl<'a, T, D: Clone> Missing<&'a T, D> {
    /// Run a bulk check: one `Missing` per entity lacking at least one of
    /// `expected`, in input order. Items keep the order of `expected`.
    pub fn collect(
        entities: &'a [T],
        expected: &[D],
        is_present: impl Fn(&T, &D) -> bool,
    ) -> Vec<Self> {
        entities
            .iter()
            .filter_map(|entity| {
                let absent: SmallVec<[D; 4]> = expected
                    .iter()
                    .filter(|item| !is_present(entity, item))
                    .cloned()
                    .collect();
                (!absent.is_empty()).then(|| Missing { entity, items: absent })
            })
            .collect()
    }
}
