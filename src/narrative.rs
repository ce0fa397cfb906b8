//! Console wording used by the demonstration run.

use std::fmt;

/// Shown in place of a suspect when no evidence matches a clue.
pub const NOBODY: &str = "Nobody";

pub fn suspect_or_nobody(suspect: Option<&str>) -> &str {
    suspect.unwrap_or(NOBODY)
}

/// Confirmation printed after linking a clue to a suspect.
pub struct EvidenceRecorded<'a> {
    pub clue_id: i32,
    pub suspect: &'a str,
}

impl fmt::Display for EvidenceRecorded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  [Evidence recorded: clue {} -> {}]",
            self.clue_id, self.suspect
        )
    }
}
