//! Raw key-value store on node and relationship records.

use std::collections::HashMap;
use super::Value;

/// A map of property names to native values.
pub type PropertyMap = HashMap<String, Value>;

/// Build a `Value::Map` from (key, value) pairs. Later duplicates win.
pub fn map_of<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Value
where
    K: Into<String>,
    V: Into<Value>,
{
    Value::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_of_last_duplicate_wins() {
        let value = map_of([("a", 1), ("b", 2), ("a", 3)]);
        match value {
            Value::Map(m) => {
                assert_eq!(m.len(), 2);
                assert_eq!(m["a"], Value::Int(3));
            }
            other => panic!("expected map, got {other:?}"),
        }
    }
}
