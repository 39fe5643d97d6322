//! An in-memory ordered map backed by a skip list.
//!
//! [`SkipList`] is the single-owner core: expected O(log n) insert, lookup,
//! and removal, with iteration in ascending key order. [`ConcurrentSkipList`]
//! shares one list across threads behind a reader/writer lock.

mod arena;
mod concurrent;
mod error;
mod level;
mod list;

pub use concurrent::ConcurrentSkipList;
pub use error::SkipListError;
pub use level::{DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY};
pub use list::{Entry, Iter, SkipList};
