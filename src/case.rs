//! The case file: mansion map, clue index and evidence table, plus where the
//! detective is standing.

use crate::clues::{Clue, ClueIndex};
use crate::error::{CaseError, Result};
use crate::evidence::{EvidenceTable, DEFAULT_BUCKETS};
use crate::rooms::{Direction, Room};

#[derive(Debug, Clone)]
pub struct CaseConfig {
    /// Number of buckets in the evidence table.
    pub buckets: usize,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Case {
    map: Option<Room>,
    clues: ClueIndex,
    evidence: EvidenceTable,
    /// Doors taken from the entrance to reach the current room.
    path: Vec<Direction>,
}

impl Case {
    pub fn new(config: CaseConfig) -> Result<Self> {
        Ok(Self {
            map: None,
            clues: ClueIndex::new(),
            evidence: EvidenceTable::new(config.buckets)?,
            path: Vec::new(),
        })
    }

    /// Installs the mansion map and puts the detective at its entrance.
    /// Returns the previous map, if any.
    pub fn set_map(&mut self, entrance: Room) -> Option<Room> {
        self.path.clear();
        self.map.replace(entrance)
    }

    pub fn map(&self) -> Option<&Room> {
        self.map.as_ref()
    }

    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    pub fn evidence(&self) -> &EvidenceTable {
        &self.evidence
    }

    pub fn current_room(&self) -> Option<&Room> {
        let mut room = self.map.as_ref()?;
        for &step in &self.path {
            room = room.child(step)?;
        }
        Some(room)
    }

    /// Walks through the left or right door of the current room.
    pub fn enter(&mut self, direction: Direction) -> Result<&Room> {
        if self
            .current_room()
            .and_then(|room| room.child(direction))
            .is_none()
        {
            return Err(CaseError::NoSuchRoom { direction });
        }
        self.path.push(direction);
        self.current_room()
            .ok_or(CaseError::NoSuchRoom { direction })
    }

    pub fn return_to_entrance(&mut self) {
        self.path.clear();
    }

    /// How many doors the detective has walked through since the entrance.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn catalog(&mut self, clue: Clue) -> Result<()> {
        self.clues.insert(clue)
    }

    /// Links a suspect to a clue and returns the evidence bucket used.
    pub fn link(&mut self, clue_id: i32, suspect: &str) -> Result<usize> {
        self.evidence.insert(clue_id, suspect)
    }

    pub fn suspect_for(&self, clue_id: i32) -> Option<&str> {
        self.evidence.lookup(clue_id)
    }
}
