// Re-export the skip list types at the crate root
pub mod skiplist;

pub use skiplist::{
    ConcurrentSkipList, Entry, Iter, SkipList, SkipListError, DEFAULT_MAX_LEVEL,
    DEFAULT_PROBABILITY,
};
