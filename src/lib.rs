//! A small detective game built on three hand-rolled data structures,
//! mostly for educational purposes.
//!
//! ## The mansion
//!
//! The player starts in the entrance hall of a mansion whose rooms form a
//! binary tree: every room has at most a left and a right door leading
//! further in. The first time a room is entered a clue is collected
//! automatically.
//!
//! ## The structures
//!
//! 1. [`RoomTree`] - the fixed binary tree of rooms. Each room carries a
//!    visited flag so a clue is only collected once.
//! 2. [`ClueIndex`] - a Binary Search Tree ordered by clue text. Inserting
//!    a clue that is already present does nothing, so an in-order walk
//!    yields every collected clue exactly once, sorted.
//! 3. [`SuspectTable`] - a separately chained hash table mapping a
//!    suspect's name to the distinct clues pointing at them.
//!
//! The [`Explorer`] drives the first two from player input and the
//! [`report`] module prints the results, including the suspect with the
//! most clues.
//!
//! ```
//! use detective::{ClueIndex, Explorer, RoomTree};
//!
//! let mut rooms = RoomTree::new();
//! let hall = rooms.create("Hall de Entrada");
//! let library = rooms.create("Biblioteca");
//! rooms.connect(Some(hall), Some(library), None);
//!
//! let mut clues = ClueIndex::new();
//! let mut output = Vec::new();
//! Explorer::new(&mut rooms, &mut clues, hall)
//!     .run("e\ns\n".as_bytes(), &mut output)
//!     .unwrap();
//!
//! assert_eq!(
//!     clues.traverse_in_order(),
//!     ["Pista encontrada em Biblioteca", "Pista encontrada em Hall de Entrada"]
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod clue;
pub mod error;
pub mod explorer;
pub mod report;
pub mod room;
pub mod seed;
pub mod suspect;
pub mod text;

pub use clue::ClueIndex;
pub use error::Error;
pub use explorer::{Command, Explorer};
pub use room::{RoomId, RoomTree};
pub use suspect::SuspectTable;

#[cfg(test)]
mod test;
