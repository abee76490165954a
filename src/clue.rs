//! The clue index: an unbalanced Binary Search Tree of clue texts.
//!
//! Clues are ordered by byte-wise comparison of their text. Inserting a clue
//! that is already stored leaves the tree untouched, so an in-order walk
//! yields each collected clue once, in ascending order. The shape of the
//! tree depends only on the order of insertion; nothing rebalances it.
//!
//! # Examples
//!
//! ```
//! use detective::ClueIndex;
//!
//! let mut clues = ClueIndex::new();
//! assert!(clues.is_empty());
//!
//! assert!(clues.insert("Pista encontrada em Cozinha"));
//! assert!(clues.insert("Pista encontrada em Biblioteca"));
//!
//! // Inserting the same clue again does nothing.
//! assert!(!clues.insert("Pista encontrada em Cozinha"));
//!
//! assert_eq!(
//!     clues.traverse_in_order(),
//!     ["Pista encontrada em Biblioteca", "Pista encontrada em Cozinha"]
//! );
//! ```

use std::cmp;

use log::{debug, trace};

use crate::text::{self, CLUE_TEXT_MAX};

type Link = Option<Box<Node>>;

/// A single stored clue with its two subtrees.
#[derive(Debug)]
struct Node {
    text: String,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(text: &str) -> Box<Self> {
        Box::new(Self {
            text: text.to_string(),
            left: None,
            right: None,
        })
    }

    /// Gets the number of levels in the subtree rooted at `link`.
    fn height(link: &Link) -> usize {
        match link {
            None => 0,
            Some(n) => Self::height(&n.left).max(Self::height(&n.right)) + 1,
        }
    }
}

/// An ordered set of distinct clue texts.
#[derive(Debug, Default)]
pub struct ClueIndex {
    root: Link,
    len: usize,
}

impl ClueIndex {
    /// Generates a new, empty `ClueIndex`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Stores `text` unless an equal clue is already present. Texts longer
    /// than [`CLUE_TEXT_MAX`] bytes are cut before comparing. Returns whether
    /// a new clue was stored.
    pub fn insert(&mut self, text: &str) -> bool {
        let text = text::bounded(text, CLUE_TEXT_MAX);
        let mut link = &mut self.root;
        while let Some(n) = link {
            link = match text.cmp(n.text.as_str()) {
                cmp::Ordering::Less => &mut n.left,
                cmp::Ordering::Equal => {
                    trace!(target: "clue", "Clue {:?} already collected", text);
                    return false;
                }
                cmp::Ordering::Greater => &mut n.right,
            };
        }

        *link = Some(Node::new_boxed(text));
        self.len += 1;
        debug!(target: "clue", "Collected clue {:?}", text);
        true
    }

    /// Whether a clue with this text is stored. The text is cut like in
    /// [`insert`][Self::insert] before looking.
    pub fn contains(&self, text: &str) -> bool {
        let text = text::bounded(text, CLUE_TEXT_MAX);
        let mut current = &self.root;
        while let Some(n) = current {
            current = match text.cmp(n.text.as_str()) {
                cmp::Ordering::Less => &n.left,
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => &n.right,
            };
        }
        false
    }

    /// Number of distinct clues stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no clue has been stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the height of this tree. An empty tree has height 0.
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /// Iterates over the clues in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(&self.root);
        iter
    }

    /// Collects the clues in ascending order.
    pub fn traverse_in_order(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Removes every clue, children before their parent. Uses an explicit
    /// stack so a list-shaped tree can't overflow the call stack.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            match (node.left.take(), node.right.take()) {
                (None, None) => trace!(target: "clue", "Releasing clue {:?}", node.text),
                (left, right) => {
                    stack.push(node);
                    stack.extend(right);
                    stack.extend(left);
                }
            }
        }
        self.len = 0;
    }
}

impl Drop for ClueIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`ClueIndex`], created by [`ClueIndex::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut link: &'a Link) {
        while let Some(n) = link {
            self.stack.push(n);
            link = &n.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.text)
    }
}
