use std::error::Error;
use std::fmt;

/// Errors that can occur while configuring or sharing a skip list
#[derive(Debug)]
pub enum SkipListError {
    /// The requested maximum level is outside the supported `1..=64` range
    InvalidMaxLevel(usize),
    /// The promotion probability is outside `[0.0, 1.0]`
    InvalidProbability(f64),
    /// An error occurred while acquiring a lock
    LockError,
}

impl fmt::Display for SkipListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipListError::InvalidMaxLevel(level) => {
                write!(f, "Max level {} is outside the supported range 1..=64", level)
            }
            SkipListError::InvalidProbability(p) => {
                write!(f, "Promotion probability {} is outside [0.0, 1.0]", p)
            }
            SkipListError::LockError => write!(f, "Failed to acquire lock"),
        }
    }
}

impl Error for SkipListError {}
