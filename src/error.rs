//! Error type shared by every structure in the case.

use crate::rooms::Direction;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CaseError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// A text field exceeded its limit. Nothing is truncated.
    #[error("{field} is {len} characters long, limit is {max}")]
    TextTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// A clue with this id is already catalogued; the first one wins.
    #[error("clue {id} is already catalogued")]
    DuplicateClue { id: i32 },

    #[error("evidence table needs at least one bucket")]
    InvalidBucketCount,

    /// The bucket directory could not be reserved.
    #[error("out of memory allocating {what}")]
    OutOfMemory { what: &'static str },

    #[error("there is no room to the {direction}")]
    NoSuchRoom { direction: Direction },
}
