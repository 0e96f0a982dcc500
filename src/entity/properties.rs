//! Property maps of canonical values.

use std::hash::{Hash, Hasher};

use hashbrown::HashMap;

use crate::model::{PropertyMap, Value};
use crate::types::{convert, DbValue};

/// Property name → [`DbValue`].
///
/// Keys are unique and case-sensitive. Insertion order is kept for display;
/// equality ignores it. Lookups go through a key → position index.
#[derive(Debug, Clone, Default)]
pub struct DbProperties {
    entries: Vec<(String, DbValue)>,
    index: HashMap<String, usize>,
}

impl DbProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-inserting a key replaces the value where the key first appeared.
    pub(crate) fn insert(&mut self, key: String, value: DbValue) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Keeps the order of the remaining entries.
    pub(crate) fn remove(&mut self, key: &str) -> Option<DbValue> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for (k, _) in &self.entries[pos..] {
            if let Some(slot) = self.index.get_mut(k.as_str()) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn get(&self, key: &str) -> Option<&DbValue> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DbValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Equality after dropping every key for which `ignored` holds, on both sides.
    ///
    /// A key holding `NULL` on one side and absent on the other is a difference.
    pub fn equals_ignoring(&self, other: &DbProperties, ignored: impl Fn(&str) -> bool) -> bool {
        let kept = |props: &DbProperties| props.keys().filter(|k| !ignored(*k)).count();
        kept(self) == kept(other)
            && self
                .iter()
                .filter(|(k, _)| !ignored(*k))
                .all(|(k, v)| other.get(k) == Some(v))
    }

    /// Keys in ascending order, for order-independent hashing and display.
    pub fn sorted(&self) -> Vec<(&str, &DbValue)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl PartialEq for DbProperties {
    fn eq(&self, other: &Self) -> bool {
        self.equals_ignoring(other, |_| false)
    }
}

impl Eq for DbProperties {}

impl Hash for DbProperties {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl<K: Into<String>> FromIterator<(K, DbValue)> for DbProperties {
    fn from_iter<I: IntoIterator<Item = (K, DbValue)>>(iter: I) -> Self {
        let mut props = DbProperties::new();
        for (k, v) in iter {
            props.insert(k.into(), v);
        }
        props
    }
}

/// Convert a native property map. Keys come out sorted, since the native
/// map has no order of its own.
pub(crate) fn convert_properties(native: &PropertyMap) -> DbProperties {
    let mut pairs: Vec<(&String, &Value)> = native.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs.into_iter().map(|(k, v)| (k.as_str(), convert(v))).collect()
}
