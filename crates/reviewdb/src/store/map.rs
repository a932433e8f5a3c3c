use std::{collections::HashMap, hash::Hash};

///
/// RecordMap
///
/// Insertion-ordered list of `(K, V)` entries with a hash index for O(1)
/// amortized lookup. Replacing a key keeps its original position; duplicate
/// keys keep the last value.
///

#[derive(Clone, Debug, Default)]
pub struct RecordMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> RecordMap<K, V> {
    /// Create an empty record map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Return the number of entries in the map.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return an iterator over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Return an iterator over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Return an iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Clear all entries from the map.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl<K, V> RecordMap<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Build a record map, keeping the last value for each key.
    #[must_use]
    pub fn from_vec(entries: Vec<(K, V)>) -> Self {
        let mut map = Self::new();
        for (key, value) in entries {
            map.insert(key, value);
        }

        map
    }

    /// Return a reference to the value for `key` if present.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Return a mutable reference to the value for `key` if present.
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index.get(key).map(|&pos| &mut self.entries[pos].1)
    }

    /// Insert or replace a value for `key`, returning the old value if
    /// present. Replacement keeps the key's original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove the entry for `key`, returning the value if present.
    ///
    /// Removal is O(n): later entries shift down to preserve insertion
    /// order, and their index positions are rewritten.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);

        for (shifted_key, _) in &self.entries[pos..] {
            if let Some(entry) = self.index.get_mut(shifted_key) {
                *entry -= 1;
            }
        }

        Some(value)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K, V> IntoIterator for RecordMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a RecordMap<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_insertion_order() {
        let mut map = RecordMap::new();
        map.insert(3, "c");
        map.insert(1, "a");
        map.insert(2, "b");

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec![3, 1, 2]);
    }

    #[test]
    fn replace_keeps_position_and_returns_old_value() {
        let mut map = RecordMap::new();
        map.insert(1, "a");
        map.insert(2, "b");

        let old = map.insert(1, "a2");

        assert_eq!(old, Some("a"));
        assert_eq!(map.len(), 2);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec![1, 2]);
        assert_eq!(map.get(&1), Some(&"a2"));
    }

    #[test]
    fn remove_reindexes_later_entries() {
        let mut map = RecordMap::new();
        map.insert(1, "a");
        map.insert(2, "b");
        map.insert(3, "c");

        assert_eq!(map.remove(&2), Some("b"));
        assert_eq!(map.remove(&2), None);

        assert_eq!(map.get(&3), Some(&"c"));
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec![1, 3]);
    }

    #[test]
    fn from_vec_keeps_last_value_per_key() {
        let map = RecordMap::from_vec(vec![(1, "a"), (2, "b"), (1, "a2")]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1), Some(&"a2"));
    }
}
