//! Clue index: a binary search tree keyed by clue id.
//!
//! Every id in a node's left subtree is strictly smaller than the node's id,
//! every id in its right subtree strictly larger, so an in-order walk lists
//! clues in ascending id order. A repeated id is rejected (first write wins).
//!
//! There is no balancing. Adversarial insertion orders degrade the tree into
//! a chain, which is why insertion, lookup, traversal and drop all loop
//! instead of recursing.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{CaseError, Result};
use crate::text::{bounded, MAX_CATEGORY, MAX_DESCRIPTION};

pub struct Clue {
    id: i32,
    description: String,
    category: String,
    left: Option<Box<Clue>>,
    right: Option<Box<Clue>>,
}

impl Clue {
    /// Creates a detached clue, ready to be catalogued.
    pub fn new(id: i32, description: &str, category: &str) -> Result<Self> {
        Ok(Self {
            id,
            description: bounded("description", description, MAX_DESCRIPTION)?,
            category: bounded("category", category, MAX_CATEGORY)?,
            left: None,
            right: None,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn left(&self) -> Option<&Clue> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Clue> {
        self.right.as_deref()
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ID {}] {} (Category: {})",
            self.id, self.description, self.category
        )
    }
}

impl fmt::Debug for Clue {
    // Children are shown by id only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clue")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("left", &self.left().map(Clue::id))
            .field("right", &self.right().map(Clue::id))
            .finish()
    }
}

impl Drop for Clue {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Clue>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut clue) = stack.pop() {
            stack.extend(clue.left.take());
            stack.extend(clue.right.take());
        }
    }
}

#[derive(Default)]
pub struct ClueIndex {
    root: Option<Box<Clue>>,
    count: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn root(&self) -> Option<&Clue> {
        self.root.as_deref()
    }

    /// Catalogues `clue` at its ordered position.
    ///
    /// If a clue with the same id is already present the index is left
    /// unchanged, the new clue is dropped and `DuplicateClue` is returned.
    pub fn insert(&mut self, clue: Clue) -> Result<()> {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match clue.id.cmp(&node.id) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(CaseError::DuplicateClue { id: clue.id }),
            };
        }
        *slot = Some(Box::new(clue));
        self.count += 1;
        Ok(())
    }

    pub fn get(&self, id: i32) -> Option<&Clue> {
        let mut node = self.root();
        while let Some(clue) = node {
            node = match id.cmp(&clue.id) {
                Ordering::Less => clue.left(),
                Ordering::Greater => clue.right(),
                Ordering::Equal => return Some(clue),
            };
        }
        None
    }

    pub fn contains(&self, id: i32) -> bool {
        self.get(id).is_some()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack: Vec<(&Clue, usize)> = self.root().map(|r| (r, 1)).into_iter().collect();
        while let Some((clue, depth)) = stack.pop() {
            best = best.max(depth);
            stack.extend(clue.left().map(|c| (c, depth + 1)));
            stack.extend(clue.right().map(|c| (c, depth + 1)));
        }
        best
    }

    /// Clues in ascending id order.
    pub fn iter(&self) -> Iter<'_> {
        let mut it = Iter { stack: Vec::new() };
        it.push_left_spine(self.root());
        it
    }

    /// Adaptor that prints one `- [ID <id>] <description> (Category: <category>)`
    /// line per clue, in id order.
    pub fn display(&self) -> ClueDisplay<'_> {
        ClueDisplay { index: self }
    }
}

/// Copies the tree under `root` bottom-up with an explicit work stack.
fn clone_subtree(root: Option<&Clue>) -> Option<Box<Clue>> {
    enum Step<'a> {
        Enter(&'a Clue),
        Build(&'a Clue),
    }

    let mut work: Vec<Step<'_>> = root.map(Step::Enter).into_iter().collect();
    let mut built: Vec<Box<Clue>> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            Step::Enter(clue) => {
                work.push(Step::Build(clue));
                work.extend(clue.right().map(Step::Enter));
                work.extend(clue.left().map(Step::Enter));
            }
            Step::Build(clue) => {
                // The left subtree finishes first, so the right copy is on top.
                let right = clue.right.as_ref().and_then(|_| built.pop());
                let left = clue.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Clue {
                    id: clue.id,
                    description: clue.description.clone(),
                    category: clue.category.clone(),
                    left,
                    right,
                }));
            }
        }
    }
    debug_assert!(built.len() <= 1);
    built.pop()
}

impl Clone for ClueIndex {
    fn clone(&self) -> Self {
        Self {
            root: clone_subtree(self.root()),
            count: self.count,
        }
    }
}

impl fmt::Debug for ClueIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a Clue;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a Clue>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Clue>) {
        while let Some(clue) = node {
            self.stack.push(clue);
            node = clue.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Clue;

    fn next(&mut self) -> Option<Self::Item> {
        let clue = self.stack.pop()?;
        self.push_left_spine(clue.right());
        Some(clue)
    }
}

pub struct ClueDisplay<'a> {
    index: &'a ClueIndex,
}

impl fmt::Display for ClueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clue in self.index {
            writeln!(f, "  - {clue}")?;
        }
        Ok(())
    }
}
