//! Room hierarchy: the mansion map.
//!
//! The shape is whatever the caller wires. There is no insertion rule and no
//! search; the only traversal is the pre-order walk used to show the map.

use std::fmt;

use crate::error::Result;
use crate::text::{bounded, MAX_ROOM_NAME};

/// Which child slot of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// A named location with up to two exclusively owned neighbours.
pub struct Room {
    name: String,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Creates a room with no children.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: bounded("room name", name, MAX_ROOM_NAME)?,
            left: None,
            right: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Room> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Room> {
        self.right.as_deref_mut()
    }

    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    pub fn child_mut(&mut self, direction: Direction) -> Option<&mut Room> {
        match direction {
            Direction::Left => self.left_mut(),
            Direction::Right => self.right_mut(),
        }
    }

    /// Puts `room` in the given slot, handing back whatever was there.
    pub fn set_child(&mut self, direction: Direction, room: Room) -> Option<Room> {
        let slot = match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        slot.replace(Box::new(room)).map(|old| *old)
    }

    pub fn set_left(&mut self, room: Room) -> Option<Room> {
        self.set_child(Direction::Left, room)
    }

    pub fn set_right(&mut self, room: Room) -> Option<Room> {
        self.set_child(Direction::Right, room)
    }

    pub fn with_left(mut self, room: Room) -> Self {
        self.set_left(room);
        self
    }

    pub fn with_right(mut self, room: Room) -> Self {
        self.set_right(room);
        self
    }

    /// Rooms of this subtree in pre-order (self, left subtree, right subtree).
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Number of rooms in this subtree, including `self`.
    pub fn room_count(&self) -> usize {
        self.preorder().count()
    }

    /// Adaptor that renders the map as printed by the detective.
    ///
    /// ```text
    ///   - Room: Main Hall
    ///     (Left -> Library)
    ///     (Right -> Dining Room)
    /// ```
    pub fn display(&self) -> MapDisplay<'_> {
        MapDisplay { root: self }
    }
}

impl Drop for Room {
    // Iterative: a long corridor of rooms must not recurse on drop.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Room>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut room) = stack.pop() {
            stack.extend(room.left.take());
            stack.extend(room.right.take());
        }
    }
}

impl fmt::Debug for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Room")
            .field("name", &self.name)
            .field("left", &self.left().map(Room::name))
            .field("right", &self.right().map(Room::name))
            .finish()
    }
}

/// Copies the map under `root` bottom-up with an explicit work stack.
fn clone_subtree(root: Option<&Room>) -> Option<Box<Room>> {
    enum Step<'a> {
        Enter(&'a Room),
        Build(&'a Room),
    }

    let mut work: Vec<Step<'_>> = root.map(Step::Enter).into_iter().collect();
    let mut built: Vec<Box<Room>> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            Step::Enter(room) => {
                work.push(Step::Build(room));
                work.extend(room.right().map(Step::Enter));
                work.extend(room.left().map(Step::Enter));
            }
            Step::Build(room) => {
                let right = room.right.as_ref().and_then(|_| built.pop());
                let left = room.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Room {
                    name: room.name.clone(),
                    left,
                    right,
                }));
            }
        }
    }
    built.pop()
}

impl Clone for Room {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            left: clone_subtree(self.left()),
            right: clone_subtree(self.right()),
        }
    }
}

impl PartialEq for Room {
    // Pre-order names plus which slots are filled pin down the whole shape.
    fn eq(&self, other: &Self) -> bool {
        fn shape(room: &Room) -> (&str, bool, bool) {
            (room.name(), room.left.is_some(), room.right.is_some())
        }
        self.preorder().map(shape).eq(other.preorder().map(shape))
    }
}

impl Eq for Room {}

pub struct Preorder<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let room = self.stack.pop()?;
        // Right first so the left subtree is visited first.
        if let Some(right) = room.right() {
            self.stack.push(right);
        }
        if let Some(left) = room.left() {
            self.stack.push(left);
        }
        Some(room)
    }
}

pub struct MapDisplay<'a> {
    root: &'a Room,
}

impl fmt::Display for MapDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for room in self.root.preorder() {
            writeln!(f, "  - Room: {}", room.name())?;
            if let Some(left) = room.left() {
                writeln!(f, "    (Left -> {})", left.name())?;
            }
            if let Some(right) = room.right() {
                writeln!(f, "    (Right -> {})", right.name())?;
            }
        }
        Ok(())
    }
}
