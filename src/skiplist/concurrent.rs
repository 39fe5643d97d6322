use std::sync::{Arc, RwLock};

use super::error::SkipListError;
use super::list::SkipList;

/// A skip list shared across threads behind a coarse reader/writer lock.
///
/// Queries (`get`, `front`, `len`, `is_empty`, `contains_key`, `entries`)
/// acquire the shared lock and may run concurrently with each other; mutators
/// (`set`, `remove`, `set_probability`) acquire the exclusive lock.
/// Operations observe a total order consistent with lock acquisition order.
///
/// Because results must outlive the lock, queries hand back owned clones
/// rather than references into the structure. Use [`SkipList`] directly when
/// single-owner, borrow-based access is enough.
pub struct ConcurrentSkipList<K, V>
where
    K: Ord,
{
    inner: Arc<RwLock<SkipList<K, V>>>,
}

impl<K, V> ConcurrentSkipList<K, V>
where
    K: Ord,
{
    /// Creates an empty list with the default max level and promotion
    /// probability.
    pub fn new() -> Self {
        ConcurrentSkipList {
            inner: Arc::new(RwLock::new(SkipList::new())),
        }
    }

    /// Creates an empty list with the given maximum level, rejecting values
    /// outside `1..=64`.
    pub fn with_max_level(max_level: usize) -> Result<Self, SkipListError> {
        Ok(ConcurrentSkipList {
            inner: Arc::new(RwLock::new(SkipList::with_max_level(max_level)?)),
        })
    }

    /// Inserts or updates `key`, returning the previous value if the key was
    /// already present.
    pub fn set(&self, key: K, value: V) -> Result<Option<V>, SkipListError> {
        let mut list = self.inner.write().map_err(|_| SkipListError::LockError)?;
        Ok(list.set(key, value))
    }

    /// Removes `key`, returning the owned key/value pair if it was present.
    pub fn remove(&self, key: &K) -> Result<Option<(K, V)>, SkipListError> {
        let mut list = self.inner.write().map_err(|_| SkipListError::LockError)?;
        Ok(list.remove(key))
    }

    /// Changes the promotion probability for future insertions. Takes the
    /// exclusive lock: the change mutates how later writes behave.
    pub fn set_probability(&self, probability: f64) -> Result<(), SkipListError> {
        let mut list = self.inner.write().map_err(|_| SkipListError::LockError)?;
        list.set_probability(probability)
    }

    /// Number of entries in the list.
    pub fn len(&self) -> Result<usize, SkipListError> {
        let list = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(list.len())
    }

    /// Returns `true` if the list holds no entries.
    pub fn is_empty(&self) -> Result<bool, SkipListError> {
        let list = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(list.is_empty())
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> Result<bool, SkipListError> {
        let list = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(list.contains_key(key))
    }
}

impl<K, V> ConcurrentSkipList<K, V>
where
    K: Ord,
    V: Clone,
{
    /// Returns a clone of the value stored under `key`.
    pub fn get(&self, key: &K) -> Result<Option<V>, SkipListError> {
        let list = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(list.get(key).cloned())
    }
}

impl<K, V> ConcurrentSkipList<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// The smallest-key entry as an owned pair, or `None` if empty.
    pub fn front(&self) -> Result<Option<(K, V)>, SkipListError> {
        let list = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(list.front().map(|e| (e.key().clone(), e.value().clone())))
    }

    /// A snapshot of all entries in ascending key order, taken under a
    /// single read lock.
    pub fn entries(&self) -> Result<Vec<(K, V)>, SkipListError> {
        let list = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(list.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

impl<K, V> Clone for ConcurrentSkipList<K, V>
where
    K: Ord,
{
    /// Clones the handle; both handles share the same underlying list.
    fn clone(&self) -> Self {
        ConcurrentSkipList {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for ConcurrentSkipList<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
