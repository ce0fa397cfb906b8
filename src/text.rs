//! Validated owned text for the named fields of rooms, clues and evidence.

use crate::error::{CaseError, Result};

// =============================================================================
// Configuration
// =============================================================================

pub const MAX_ROOM_NAME: usize = 49;
pub const MAX_DESCRIPTION: usize = 99;
pub const MAX_CATEGORY: usize = 49;
pub const MAX_SUSPECT: usize = 49;

/// Copies `value` into an owned `String` if it has at most `max` characters.
///
/// Length is counted in `char`s, so multi-byte names are not penalised.
pub(crate) fn bounded(field: &'static str, value: &str, max: usize) -> Result<String> {
    let len = value.chars().count();
    if len > max {
        return Err(CaseError::TextTooLong { field, len, max });
    }
    Ok(value.to_owned())
}
