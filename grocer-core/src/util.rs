use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Occurrence tally over an ordered key space.
///
/// Only keys that were recorded at least once are stored, so every count
/// held by the map is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<K>
where
    K: std::cmp::Ord,
{
    map: BTreeMap<K, u64>,
}

impl<K> Default for Counter<K>
where
    K: std::cmp::Ord,
{
    fn default() -> Self {
        Counter {
            map: BTreeMap::new(),
        }
    }
}

impl<K> Counter<K>
where
    K: std::cmp::Ord,
{
    pub fn new() -> Counter<K> {
        Default::default()
    }

    pub fn record(&mut self, key: K) {
        if let Some(val) = self.map.get_mut(&key) {
            *val += 1;
        } else {
            self.map.insert(key, 1);
        }
    }

    /// Count for `key`, zero when it was never recorded.
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(key).copied().unwrap_or(0)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.map.iter().map(|(key, count)| (key, *count))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.map.values().sum()
    }
}
