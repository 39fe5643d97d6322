/// Stable index of an entry slot in the arena.
pub(crate) type EntryId = usize;

/// One stored key/value pair plus its forward pointers.
///
/// `forward.len()` is the entry's height, fixed at creation. `forward[0]`
/// always points at the in-order successor.
#[derive(Debug)]
pub(crate) struct EntryData<K, V> {
    pub key: K,
    pub value: V,
    pub forward: Vec<Option<EntryId>>,
}

/// Slot-vector arena that owns every entry in the list.
///
/// Forward links between entries are `EntryId` indices into this arena rather
/// than owning pointers, so a node linked at several levels has exactly one
/// owner. Vacated slots go on a free list and are reused by later insertions.
#[derive(Debug)]
pub(crate) struct EntryArena<K, V> {
    slots: Vec<Option<EntryData<K, V>>>,
    free: Vec<EntryId>,
}

impl<K, V> EntryArena<K, V> {
    pub fn new() -> Self {
        EntryArena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores a new entry and returns its stable id.
    pub fn insert(&mut self, entry: EntryData<K, V>) -> EntryId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id].is_none());
                self.slots[id] = Some(entry);
                id
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        }
    }

    /// Takes the entry out of its slot, returning ownership of its data.
    /// The slot is recycled for future insertions.
    pub fn remove(&mut self, id: EntryId) -> EntryData<K, V> {
        let entry = self.slots[id].take().expect("removed entry id must be live");
        self.free.push(id);
        entry
    }

    pub fn get(&self, id: EntryId) -> &EntryData<K, V> {
        self.slots[id].as_ref().expect("entry id must be live")
    }

    pub fn get_mut(&mut self, id: EntryId) -> &mut EntryData<K, V> {
        self.slots[id].as_mut().expect("entry id must be live")
    }
}
