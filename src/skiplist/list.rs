use super::arena::{EntryArena, EntryData, EntryId};
use super::error::SkipListError;
use super::level::{LevelGenerator, DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY};

/// Hard upper bound on the configurable maximum level.
const MAX_LEVEL_LIMIT: usize = 64;

/// An ordered map backed by a skip list.
///
/// Entries live in an arena and link to each other through stable indices.
/// Each entry participates in `height` levels; level 0 is the complete,
/// strictly increasing chain of all entries. A traversal starts at the
/// header's top level and descends, never re-walking horizontal progress,
/// which gives expected O(log n) lookups, insertions, and removals.
///
/// This type is single-owner: mutation goes through `&mut self`. Use
/// [`ConcurrentSkipList`](super::ConcurrentSkipList) to share one list across
/// threads behind a reader/writer lock.
#[derive(Debug)]
pub struct SkipList<K, V>
where
    K: Ord,
{
    arena: EntryArena<K, V>,
    /// Header forward pointers, one per level. The universal predecessor at
    /// the start of every traversal.
    head: Vec<Option<EntryId>>,
    /// Rightmost strictly-less predecessor per level from the latest cached
    /// traversal; `None` means the header. Reused across calls to avoid
    /// reallocation, valid only within a single `set`/`remove`.
    prev_cache: Vec<Option<EntryId>>,
    levels: LevelGenerator,
    max_level: usize,
    len: usize,
}

impl<K, V> SkipList<K, V>
where
    K: Ord,
{
    /// Creates an empty list with the default max level (18) and promotion
    /// probability (1/e).
    pub fn new() -> Self {
        Self::with_max_level(DEFAULT_MAX_LEVEL).expect("default max level is in range")
    }

    /// Creates an empty list with the given maximum level.
    ///
    /// Returns [`SkipListError::InvalidMaxLevel`] if `max_level` is outside
    /// `1..=64`; out-of-range values are rejected, never clamped.
    pub fn with_max_level(max_level: usize) -> Result<Self, SkipListError> {
        if !(1..=MAX_LEVEL_LIMIT).contains(&max_level) {
            return Err(SkipListError::InvalidMaxLevel(max_level));
        }
        Ok(Self::build(
            max_level,
            LevelGenerator::new(max_level, DEFAULT_PROBABILITY),
        ))
    }

    /// Like [`SkipList::with_max_level`] but with a fixed RNG seed, so the
    /// sequence of entry heights is deterministic.
    pub fn with_max_level_and_seed(max_level: usize, seed: u64) -> Result<Self, SkipListError> {
        if !(1..=MAX_LEVEL_LIMIT).contains(&max_level) {
            return Err(SkipListError::InvalidMaxLevel(max_level));
        }
        Ok(Self::build(
            max_level,
            LevelGenerator::with_seed(max_level, DEFAULT_PROBABILITY, seed),
        ))
    }

    fn build(max_level: usize, levels: LevelGenerator) -> Self {
        SkipList {
            arena: EntryArena::new(),
            head: vec![None; max_level],
            prev_cache: vec![None; max_level],
            levels,
            max_level,
            len: 0,
        }
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The configured maximum level.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// The promotion probability used for future insertions.
    pub fn probability(&self) -> f64 {
        self.levels.probability()
    }

    /// Changes the promotion probability used for future insertions; the
    /// heights of existing entries never change.
    ///
    /// Returns [`SkipListError::InvalidProbability`] outside `[0.0, 1.0]`.
    pub fn set_probability(&mut self, probability: f64) -> Result<(), SkipListError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(SkipListError::InvalidProbability(probability));
        }
        self.levels.set_probability(probability);
        Ok(())
    }

    /// Successor of `pred` at `level`, where `None` stands for the header.
    fn forward(&self, pred: Option<EntryId>, level: usize) -> Option<EntryId> {
        match pred {
            Some(id) => self.arena.get(id).forward[level],
            None => self.head[level],
        }
    }

    /// Records, for every level from the top down, the rightmost node whose
    /// key is strictly less than `key` (`None` for the header) into the
    /// shared predecessor cache. Horizontal progress made at a higher level
    /// carries over to the next, so the whole descent costs expected
    /// O(log n) steps.
    ///
    /// Only `set` and `remove` may use this path: the cache is mutable state
    /// shared across calls, so it is off limits to shared-lock readers.
    fn fill_prev_cache(&mut self, key: &K) {
        let mut pred: Option<EntryId> = None;
        for level in (0..self.max_level).rev() {
            let mut next = self.forward(pred, level);
            while let Some(id) = next {
                if self.arena.get(id).key < *key {
                    pred = Some(id);
                    next = self.arena.get(id).forward[level];
                } else {
                    break;
                }
            }
            self.prev_cache[level] = pred;
        }
    }

    /// Locates the entry with exactly `key`, keeping all traversal state on
    /// the stack. This is the read-only counterpart of `fill_prev_cache`.
    fn find(&self, key: &K) -> Option<EntryId> {
        let mut pred: Option<EntryId> = None;
        let mut next: Option<EntryId> = None;
        for level in (0..self.max_level).rev() {
            next = self.forward(pred, level);
            while let Some(id) = next {
                if self.arena.get(id).key < *key {
                    pred = Some(id);
                    next = self.arena.get(id).forward[level];
                } else {
                    break;
                }
            }
        }
        match next {
            Some(id) if self.arena.get(id).key == *key => Some(id),
            _ => None,
        }
    }

    /// Inserts `key` with `value`, or replaces the value in place if the key
    /// is already present. Returns the previous value on replacement.
    ///
    /// An update never re-draws the entry's height.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.fill_prev_cache(&key);

        // Exact match only: a strictly greater candidate means the key is
        // absent and falls through to insertion.
        if let Some(id) = self.forward(self.prev_cache[0], 0) {
            if self.arena.get(id).key == key {
                return Some(std::mem::replace(&mut self.arena.get_mut(id).value, value));
            }
        }

        let height = self.levels.random_level();
        let id = self.arena.insert(EntryData {
            key,
            value,
            forward: vec![None; height],
        });
        for level in 0..height {
            let pred = self.prev_cache[level];
            let succ = self.forward(pred, level);
            self.arena.get_mut(id).forward[level] = succ;
            match pred {
                Some(pid) => self.arena.get_mut(pid).forward[level] = Some(id),
                None => self.head[level] = Some(id),
            }
        }
        self.len += 1;
        None
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|id| &self.arena.get(id).value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.arena.get_mut(id).value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Returns a borrowed view of the entry stored under `key`, from which
    /// the in-order successor chain can be walked.
    pub fn get_entry(&self, key: &K) -> Option<Entry<'_, K, V>> {
        self.find(key).map(|id| Entry { list: self, id })
    }

    /// Removes `key`, unlinking its entry at every level it participates in,
    /// and returns the owned key/value pair. Returns `None` if the key is
    /// absent, leaving the list untouched.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        self.fill_prev_cache(key);

        let id = self.forward(self.prev_cache[0], 0)?;
        if self.arena.get(id).key != *key {
            return None;
        }

        let height = self.arena.get(id).forward.len();
        for level in 0..height {
            let succ = self.arena.get(id).forward[level];
            match self.prev_cache[level] {
                Some(pid) => self.arena.get_mut(pid).forward[level] = succ,
                None => self.head[level] = succ,
            }
        }
        self.len -= 1;
        let entry = self.arena.remove(id);
        Some((entry.key, entry.value))
    }

    /// The entry with the smallest key, or `None` if the list is empty.
    pub fn front(&self) -> Option<Entry<'_, K, V>> {
        self.head[0].map(|id| Entry { list: self, id })
    }

    /// Iterates over all entries in ascending key order. Each step is O(1).
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            next: self.head[0],
        }
    }
}

impl<K, V> Default for SkipList<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

/// A borrowed view of one stored entry.
///
/// Holding an `Entry` borrows the whole list, so the view can never observe
/// a concurrent structural change.
pub struct Entry<'a, K, V>
where
    K: Ord,
{
    list: &'a SkipList<K, V>,
    id: EntryId,
}

impl<'a, K, V> Entry<'a, K, V>
where
    K: Ord,
{
    pub fn key(&self) -> &'a K {
        &self.list.arena.get(self.id).key
    }

    pub fn value(&self) -> &'a V {
        &self.list.arena.get(self.id).value
    }

    /// The number of levels this entry participates in, fixed at insertion.
    pub fn height(&self) -> usize {
        self.list.arena.get(self.id).forward.len()
    }

    /// The next entry in key order, or `None` at the tail.
    pub fn next(&self) -> Option<Entry<'a, K, V>> {
        self.list.arena.get(self.id).forward[0].map(|id| Entry {
            list: self.list,
            id,
        })
    }
}

/// Iterator over the level-0 chain, yielding entries in ascending key order.
pub struct Iter<'a, K, V>
where
    K: Ord,
{
    list: &'a SkipList<K, V>,
    next: Option<EntryId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let entry = self.list.arena.get(id);
        self.next = entry.forward[0];
        Some((&entry.key, &entry.value))
    }
}
