//! Separate-chaining hash table with dynamic resizing.
//!
//! `HashtableMap` backs every node and edge lookup in the graph store. Each
//! bucket is a chain of entries; a key lives in bucket
//! `hash(key) mod capacity`. When an insert pushes the load factor
//! (`size / capacity`) to [`MAX_LOAD_FACTOR`] or above, the table doubles its
//! capacity and rehashes every entry. Removal never shrinks the table.
//!
//! Unlike `std::collections::HashMap`, inserting an existing key is an error
//! rather than an overwrite, and lookups of absent keys fail with
//! [`NavError::KeyNotFound`] instead of returning `None`.

use crate::error::{NavError, Result};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use xxhash_rust::xxh3::Xxh3;

/// Capacity used by [`HashtableMap::new`].
pub const DEFAULT_CAPACITY: usize = 64;

/// Load factor at which an insert triggers a capacity doubling.
pub const MAX_LOAD_FACTOR: f64 = 0.8;

/// Default hasher: xxh3, unseeded, so bucket order is the same on every run.
pub type DefaultHashBuilder = BuildHasherDefault<Xxh3>;

struct Entry<K, V> {
    key: K,
    value: V,
}

/// A mutable mapping from unique keys to values.
///
/// # Example
///
/// ```
/// use nav_core::HashtableMap;
///
/// let mut map: HashtableMap<String, u32> = HashtableMap::new();
/// map.put("Union South".to_string(), 42).unwrap();
/// assert_eq!(*map.get("Union South").unwrap(), 42);
/// assert!(map.put("Union South".to_string(), 7).is_err());
/// ```
pub struct HashtableMap<K, V, S = DefaultHashBuilder> {
    table: Vec<Vec<Entry<K, V>>>,
    size: usize,
    hash_builder: S,
}

impl<K, V, S> HashtableMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    S: BuildHasher + Default,
{
    /// Create an empty map with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self {
            table: empty_table(DEFAULT_CAPACITY),
            size: 0,
            hash_builder: S::default(),
        }
    }

    /// Create an empty map with `capacity` buckets.
    ///
    /// Fails with [`NavError::InvalidArgument`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S> HashtableMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    /// Create an empty map with `capacity` buckets and the given hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Result<Self> {
        if capacity == 0 {
            return Err(NavError::invalid_argument(
                "hashtable capacity must be positive",
            ));
        }
        Ok(Self {
            table: empty_table(capacity),
            size: 0,
            hash_builder,
        })
    }

    /// Insert a new key/value pair.
    ///
    /// Fails with [`NavError::DuplicateKey`] if the key is already present;
    /// the stored value is left untouched in that case.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        let index = self.bucket_index(&key);
        if self.table[index].iter().any(|entry| entry.key == key) {
            return Err(NavError::duplicate_key(&key));
        }
        self.table[index].push(Entry { key, value });
        self.size += 1;

        if self.load_factor() >= MAX_LOAD_FACTOR {
            self.resize();
        }
        Ok(())
    }

    /// Check whether a key maps to a value.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Get the value a key maps to.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.find(key)
            .map(|entry| &entry.value)
            .ok_or_else(|| NavError::key_not_found(&key))
    }

    /// Get a mutable reference to the value a key maps to.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let index = self.bucket_index(key);
        self.table[index]
            .iter_mut()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
            .ok_or_else(|| NavError::key_not_found(&key))
    }

    /// Remove a key and return the value it mapped to.
    ///
    /// The remaining entries of the bucket keep their relative order.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.table[index];
        let position = bucket
            .iter()
            .position(|entry| entry.key.borrow() == key)
            .ok_or_else(|| NavError::key_not_found(&key))?;
        let entry = bucket.remove(position);
        self.size -= 1;
        Ok(entry.value)
    }

    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.table[index]
            .iter()
            .find(|entry| entry.key.borrow() == key)
    }

    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        (self.hash_builder.hash_one(key) % self.table.len() as u64) as usize
    }

    /// Double the capacity and rehash every entry into the new table.
    fn resize(&mut self) {
        let new_capacity = self.table.len() * 2;
        let old_table = std::mem::replace(&mut self.table, empty_table(new_capacity));

        // Keys are already unique, so entries go straight into their chain.
        for entry in old_table.into_iter().flatten() {
            let index = self.bucket_index(&entry.key);
            self.table[index].push(entry);
        }

        tracing::debug!(
            capacity = new_capacity,
            size = self.size,
            "hashtable resized"
        );
    }
}

impl<K, V, S> HashtableMap<K, V, S> {
    /// Remove every entry. The capacity is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.table {
            bucket.clear();
        }
        self.size = 0;
    }

    /// Number of stored keys.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.table.len() as f64
    }

    /// Iterate over entries in bucket order.
    ///
    /// The order is stable between mutations but changes when the table
    /// resizes; sort the keys if a deterministic order matters.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.table
            .iter()
            .flatten()
            .map(|entry| (&entry.key, &entry.value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.table
            .iter_mut()
            .flatten()
            .map(|entry| &mut entry.value)
    }
}

impl<K, V, S> Default for HashtableMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashtableMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn empty_table<K, V>(capacity: usize) -> Vec<Vec<Entry<K, V>>> {
    (0..capacity).map(|_| Vec::new()).collect()
}
