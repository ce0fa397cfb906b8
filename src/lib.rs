//! # mansion-case
//!
//! Three linked structures for working a mansion mystery:
//!
//! - [`Room`]: the mansion map, a binary tree wired by hand and shown in
//!   pre-order.
//! - [`ClueIndex`]: a binary search tree of [`Clue`]s keyed by id, listed in
//!   ascending id order.
//! - [`EvidenceTable`]: a chained hash table linking clue ids to suspects.
//!
//! [`Case`] groups them with a cursor for the detective's current room.
//!
//! ## Example
//!
//! ```rust
//! use mansion_case::{Case, CaseConfig, Clue, Room};
//!
//! let mut case = Case::new(CaseConfig::default()).unwrap();
//! case.set_map(Room::new("Main Hall").unwrap().with_left(Room::new("Library").unwrap()));
//!
//! case.catalog(Clue::new(202, "Kitchen Knife", "Murder Weapon").unwrap()).unwrap();
//! case.link(202, "Butler").unwrap();
//!
//! assert_eq!(case.suspect_for(202), Some("Butler"));
//! assert_eq!(case.suspect_for(101), None);
//! ```

#![forbid(unsafe_code)]

pub mod case;
pub mod clues;
pub mod error;
pub mod evidence;
pub mod narrative;
pub mod rooms;
pub mod text;

pub use case::{Case, CaseConfig};
pub use clues::{Clue, ClueIndex};
pub use error::{CaseError, Result};
pub use evidence::{Evidence, EvidenceTable, DEFAULT_BUCKETS};
pub use rooms::{Direction, Room};

#[cfg(test)]
mod proptests;
