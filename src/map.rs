// Copyright (c) 2024-present, chunked-seq contributors
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{
    measure::{Keyed, MaxKey},
    seq::ChunkedSeq,
    spine::Bootstrapped,
};

#[derive(Clone, Debug)]
pub(crate) struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Keyed for Entry<K, V>
where
    K: Ord + Clone + std::fmt::Debug,
{
    type Key = K;

    fn key(&self) -> &K {
        &self.key
    }
}

type Inner<K, V, const CAP: usize> =
    ChunkedSeq<Entry<K, V>, MaxKey, Bootstrapped<Entry<K, V>, MaxKey, CAP>, CAP>;

/// An ordered associative map over a chunked sequence.
///
/// Entries are stored in ascending key order; the sequence is annotated
/// with the running maximum key, which turns lookup into a monotone
/// search over cached measures. Lookups cost O(log n + CAP), updates
/// additionally pay the split/append of the backing sequence.
///
/// Inserting an existing key overwrites its value.
pub struct SortedMap<K, V, const CAP: usize = 8>
where
    K: Ord + Clone + std::fmt::Debug,
{
    seq: Inner<K, V, CAP>,
}

impl<K, V, const CAP: usize> SortedMap<K, V, CAP>
where
    K: Ord + Clone + std::fmt::Debug,
{
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { seq: Inner::new() }
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    // Index of the first entry with key >= `key`, if any.
    fn lower_bound(&self, key: &K) -> Option<usize> {
        self.seq
            .search_by_measure(|max| max.as_ref().is_some_and(|m| m >= key))
    }

    /// Borrows the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.lower_bound(key)?;
        let entry = self.seq.get(index)?;
        (entry.key == *key).then_some(&entry.value)
    }

    /// Mutably borrows the value stored for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.lower_bound(key)?;
        let entry = self.seq.get_mut(index)?;
        (entry.key == *key).then_some(&mut entry.value)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts or overwrites; returns the previous value for `key` if one
    /// was stored.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.lower_bound(&key) {
            None => {
                // every stored key is smaller
                self.seq.push_back(Entry { key, value });
                None
            }
            Some(index) => {
                let entry = match self.seq.get_mut(index) {
                    Some(entry) => entry,
                    None => unreachable!("lower bound index out of range"),
                };
                if entry.key == key {
                    return Some(std::mem::replace(&mut entry.value, value));
                }
                match self.seq.insert_at(index, Entry { key, value }) {
                    Ok(()) => None,
                    Err(_) => unreachable!("lower bound index out of range"),
                }
            }
        }
    }

    /// Removes `key`; returns its value if it was stored.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.lower_bound(key)?;
        let found = self.seq.get(index).is_some_and(|entry| entry.key == *key);
        if !found {
            return None;
        }
        match self.seq.remove_at(index) {
            Ok(entry) => Some(entry.value),
            Err(_) => unreachable!("lower bound index out of range"),
        }
    }

    /// The entry with the smallest key.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.seq.front().map(|entry| (&entry.key, &entry.value))
    }

    /// The entry with the largest key.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.seq.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates entries in ascending key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + '_ {
        self.seq.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates keys in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.seq.iter().map(|entry| &entry.key)
    }

    /// Iterates values in ascending key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + '_ {
        self.seq.iter().map(|entry| &entry.value)
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.seq.clear();
    }

    #[doc(hidden)]
    pub fn check_invariants(&self) {
        self.seq.check_invariants();
        let mut previous: Option<&K> = None;
        for entry in self.seq.iter() {
            if let Some(previous) = previous {
                assert!(*previous < entry.key, "map keys out of order");
            }
            previous = Some(&entry.key);
        }
    }
}

impl<K, V, const CAP: usize> Default for SortedMap<K, V, CAP>
where
    K: Ord + Clone + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, const CAP: usize> Clone for SortedMap<K, V, CAP>
where
    K: Ord + Clone + std::fmt::Debug,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            seq: self.seq.clone(),
        }
    }
}

impl<K, V, const CAP: usize> std::fmt::Debug for SortedMap<K, V, CAP>
where
    K: Ord + Clone + std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, const CAP: usize> PartialEq for SortedMap<K, V, CAP>
where
    K: Ord + Clone + std::fmt::Debug,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, const CAP: usize> FromIterator<(K, V)> for SortedMap<K, V, CAP>
where
    K: Ord + Clone + std::fmt::Debug,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, const CAP: usize> Extend<(K, V)> for SortedMap<K, V, CAP>
where
    K: Ord + Clone + std::fmt::Debug,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn insert_overwrites_and_orders() {
        let mut map = SortedMap::<u32, &str>::new();
        assert_eq!(None, map.insert(5, "a"));
        assert_eq!(None, map.insert(2, "b"));
        assert_eq!(None, map.insert(9, "c"));
        assert_eq!(Some("a"), map.insert(5, "d"));

        assert_eq!(3, map.len());
        assert_eq!(
            vec![(2, "b"), (5, "d"), (9, "c")],
            map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>()
        );
        assert_eq!(Some(&"d"), map.get(&5));
        assert_eq!(None, map.get(&7));
        map.check_invariants();
    }

    #[test]
    fn remove_returns_the_stored_value() {
        let mut map: SortedMap<u32, u32> = (0..100).map(|k| (k * 2, k)).collect();
        assert_eq!(Some(21), map.remove(&42));
        assert_eq!(None, map.remove(&42));
        assert_eq!(None, map.remove(&43));
        assert_eq!(99, map.len());
        map.check_invariants();
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = SortedMap::<u32, u32>::new();
        map.insert(1, 10);
        if let Some(value) = map.get_mut(&1) {
            *value = 11;
        }
        assert_eq!(Some(&11), map.get(&1));
        map.check_invariants();
    }

    #[test]
    fn first_and_last_follow_key_order() {
        let map: SortedMap<i64, ()> = [(3, ()), (-7, ()), (12, ())].into_iter().collect();
        assert_eq!(Some((&-7, &())), map.first());
        assert_eq!(Some((&12, &())), map.last());
    }

    #[test]
    fn many_entries_stay_sorted() {
        // keys inserted in a scrambled order
        let mut map = SortedMap::<u32, u32, 8>::new();
        let mut key = 0u32;
        for _ in 0..1_000 {
            key = key.wrapping_mul(1_664_525).wrapping_add(1_013_904_223) % 4_096;
            map.insert(key, key);
        }
        map.check_invariants();
        let keys: Vec<u32> = map.keys().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, keys);
    }
}
