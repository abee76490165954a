//! The mansion: a binary tree of rooms built once at startup.
//!
//! Rooms are stored in an arena owned by the [`RoomTree`] and refer to their
//! children by [`RoomId`]. The tree is wired up by the caller with
//! [`RoomTree::connect`] and nothing checks that the result is really a tree,
//! which is fine because the layout is fixed.
//!
//! # Examples
//!
//! ```
//! use detective::RoomTree;
//!
//! let mut rooms = RoomTree::new();
//! let hall = rooms.create("Hall de Entrada");
//! let kitchen = rooms.create("Cozinha");
//! rooms.connect(Some(hall), None, Some(kitchen));
//!
//! assert_eq!(rooms.left(hall), None);
//! assert_eq!(rooms.right(hall), Some(kitchen));
//!
//! // Only the first visit counts.
//! assert!(rooms.visit(kitchen));
//! assert!(!rooms.visit(kitchen));
//! ```

use log::{debug, trace};

use crate::text::{self, ROOM_NAME_MAX};

/// Handle to a room inside a [`RoomTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoomId(usize);

/// A single room in the mansion.
#[derive(Clone, Debug)]
pub struct Room {
    name: String,
    visited: bool,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

impl Room {
    /// The room's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the player has already been here.
    pub fn visited(&self) -> bool {
        self.visited
    }
}

/// Owns every room of the mansion.
#[derive(Clone, Debug, Default)]
pub struct RoomTree {
    rooms: Vec<Room>,
}

impl RoomTree {
    /// Generates a new, empty `RoomTree`.
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Adds an unvisited room without doors. Names longer than
    /// [`ROOM_NAME_MAX`] bytes are cut.
    pub fn create(&mut self, name: &str) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room {
            name: text::bounded(name, ROOM_NAME_MAX).to_string(),
            visited: false,
            left: None,
            right: None,
        });
        debug!(target: "room", "Created room {:?} as {:?}", name, id);
        id
    }

    /// Sets the left and right doors of `parent`, replacing whatever was
    /// there. Does nothing when there is no parent.
    pub fn connect(&mut self, parent: Option<RoomId>, left: Option<RoomId>, right: Option<RoomId>) {
        let Some(parent) = parent else {
            return;
        };
        let room = self.room_mut(parent);
        room.left = left;
        room.right = right;
        trace!(target: "room", "Connected {:?} -> ({:?}, {:?})", parent, left, right);
    }

    /// Looks up a room.
    ///
    /// ## Panics
    ///
    /// When `id` was not handed out by this tree.
    pub fn get(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// The room behind the left door, if any.
    pub fn left(&self, id: RoomId) -> Option<RoomId> {
        self.get(id).left
    }

    /// The room behind the right door, if any.
    pub fn right(&self, id: RoomId) -> Option<RoomId> {
        self.get(id).right
    }

    /// Marks the room as visited. Returns `true` only the first time.
    pub fn visit(&mut self, id: RoomId) -> bool {
        let room = self.room_mut(id);
        let first = !room.visited;
        room.visited = true;
        first
    }

    /// Number of rooms created so far.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no room has been created.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The rooms reachable from `root`, children before their parent.
    pub fn post_order(&self, root: RoomId) -> Vec<RoomId> {
        let mut order = Vec::with_capacity(self.rooms.len());
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            stack.push((id, true));
            let room = self.get(id);
            // Right is pushed first so the left subtree is finished first.
            stack.extend(room.right.map(|r| (r, false)));
            stack.extend(room.left.map(|l| (l, false)));
        }
        order
    }

    /// The order [`clear`][Self::clear] releases rooms in: the
    /// [`post_order`][Self::post_order] of every room that isn't behind
    /// another room's door, in creation order.
    pub fn release_order(&self) -> Vec<RoomId> {
        let mut is_child = vec![false; self.rooms.len()];
        for room in &self.rooms {
            for child in room.left.into_iter().chain(room.right) {
                is_child[child.0] = true;
            }
        }

        let mut released = vec![false; self.rooms.len()];
        let mut order = Vec::with_capacity(self.rooms.len());
        for root in (0..self.rooms.len()).filter(|&i| !is_child[i]).map(RoomId) {
            for id in self.post_order(root) {
                if !released[id.0] {
                    released[id.0] = true;
                    order.push(id);
                }
            }
        }
        order
    }

    /// Removes every room, children before their parent. Handles handed out
    /// before are invalid afterwards.
    pub fn clear(&mut self) {
        if self.rooms.is_empty() {
            return;
        }
        for id in self.release_order() {
            trace!(target: "room", "Releasing room {:?}", self.get(id).name);
        }
        debug!(target: "room", "Released {} rooms", self.rooms.len());
        self.rooms.clear();
    }

    fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }
}

impl Drop for RoomTree {
    fn drop(&mut self) {
        self.clear();
    }
}
