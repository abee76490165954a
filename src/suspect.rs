//! The suspect table: a hash table with separate chaining mapping a
//! suspect's name to the distinct clues associated with them.
//!
//! Buckets are singly linked chains of [`Suspect`]s and every suspect owns a
//! singly linked list of clue texts. New suspects and new clues are both
//! prepended, so chains and clue lists read most-recent-first.
//!
//! # Examples
//!
//! ```
//! use detective::SuspectTable;
//!
//! let mut table = SuspectTable::with_default_size()?;
//! table.associate("Pista encontrada em Biblioteca", "Sr. Verde");
//! table.associate("Pista encontrada em Cozinha", "Sr. Verde");
//! table.associate("Pista encontrada em Cozinha", "Sra. Rosa");
//!
//! // Associating the same pair twice is a no-op.
//! table.associate("Pista encontrada em Cozinha", "Sr. Verde");
//!
//! let green = table.find("Sr. Verde").unwrap();
//! assert_eq!(
//!     green.clues().collect::<Vec<_>>(),
//!     ["Pista encontrada em Cozinha", "Pista encontrada em Biblioteca"]
//! );
//!
//! let most = table.report_most_associated().unwrap();
//! assert_eq!((most.name(), most.clue_count()), ("Sr. Verde", 2));
//! # Ok::<(), detective::Error>(())
//! ```

use log::{debug, trace};

use crate::text::{self, CLUE_TEXT_MAX, SUSPECT_NAME_MAX};
use crate::Error;

/// Number of buckets used by [`SuspectTable::with_default_size`].
pub const DEFAULT_TABLE_SIZE: usize = 101;

/// Maps `name` to a bucket by summing its bytes modulo `table_size`.
///
/// Names made of the same bytes in a different order land in the same
/// bucket. A `table_size` of zero maps everything to bucket 0.
///
/// # Examples
///
/// ```
/// use detective::suspect::hash;
///
/// assert_eq!(hash("ab", 101), (97 + 98) % 101);
/// assert_eq!(hash("ab", 101), hash("ba", 101));
/// assert_eq!(hash("ab", 0), 0);
/// ```
pub fn hash(name: &str, table_size: usize) -> usize {
    if table_size == 0 {
        return 0;
    }
    let sum = name
        .bytes()
        .fold(0u32, |sum, b| sum.wrapping_add(u32::from(b)));
    sum as usize % table_size
}

struct ClueNode {
    text: String,
    next: Option<Box<ClueNode>>,
}

/// A named suspect and the distinct clues pointing at them.
pub struct Suspect {
    name: String,
    clues: Option<Box<ClueNode>>,
    clue_count: usize,
    next: Option<Box<Suspect>>,
}

impl Suspect {
    fn new_boxed(name: &str, next: Option<Box<Suspect>>) -> Box<Self> {
        Box::new(Self {
            name: name.to_string(),
            clues: None,
            clue_count: 0,
            next,
        })
    }

    /// The suspect's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct clues associated with this suspect.
    pub fn clue_count(&self) -> usize {
        self.clue_count
    }

    /// The associated clues, most recently associated first.
    pub fn clues(&self) -> impl Iterator<Item = &str> {
        let mut current = self.clues.as_deref();
        std::iter::from_fn(move || {
            let node = current?;
            current = node.next.as_deref();
            Some(node.text.as_str())
        })
    }

    /// Whether `text` is already associated with this suspect.
    pub fn has_clue(&self, text: &str) -> bool {
        self.clues().any(|clue| clue == text)
    }

    /// Prepends `text` unless it is already present. Returns whether it was
    /// added.
    fn add_clue(&mut self, text: &str) -> bool {
        if self.has_clue(text) {
            return false;
        }
        self.clues = Some(Box::new(ClueNode {
            text: text.to_string(),
            next: self.clues.take(),
        }));
        self.clue_count += 1;
        true
    }

    fn clear_clues(&mut self) {
        let mut current = self.clues.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.clue_count = 0;
    }
}

/// A fixed number of buckets, each holding a chain of suspects.
pub struct SuspectTable {
    buckets: Vec<Option<Box<Suspect>>>,
    len: usize,
}

impl SuspectTable {
    /// Creates a table with `size` empty buckets.
    ///
    /// Larger tables shorten the bucket chains, and with them the cost of
    /// [`find`][Self::find] and [`associate`][Self::associate].
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidTableSize`] when `size` is zero and
    /// [`Error::Allocation`] when the buckets can't be allocated.
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidTableSize);
        }
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(size)?;
        buckets.resize_with(size, || None);
        debug!(target: "suspect", "Allocated suspect table with {} buckets", size);
        Ok(Self { buckets, len: 0 })
    }

    /// Creates a table with [`DEFAULT_TABLE_SIZE`] buckets.
    pub fn with_default_size() -> Result<Self, Error> {
        Self::new(DEFAULT_TABLE_SIZE)
    }

    /// Number of buckets.
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct suspects.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no suspect.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks up the suspect with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Suspect> {
        let name = text::bounded(name, SUSPECT_NAME_MAX);
        let mut current = self.buckets[hash(name, self.table_size())].as_deref();
        while let Some(suspect) = current {
            if suspect.name == name {
                return Some(suspect);
            }
            current = suspect.next.as_deref();
        }
        None
    }

    /// Associates `clue` with the suspect called `name`, adding the suspect
    /// at the head of its bucket if needed. An empty clue still creates the
    /// suspect but is never stored, and a clue the suspect already has is
    /// ignored.
    pub fn associate(&mut self, clue: &str, name: &str) {
        let name = text::bounded(name, SUSPECT_NAME_MAX);
        let clue = text::bounded(clue, CLUE_TEXT_MAX);
        let index = hash(name, self.table_size());
        trace!(target: "suspect", "Suspect {:?} hashes to bucket {}", name, index);

        let mut current = self.buckets[index].as_deref_mut();
        while let Some(suspect) = current {
            if suspect.name == name {
                if !clue.is_empty() && suspect.add_clue(clue) {
                    debug!(target: "suspect", "Associated {:?} with {:?}", clue, name);
                }
                return;
            }
            current = suspect.next.as_deref_mut();
        }

        let bucket = &mut self.buckets[index];
        let mut suspect = Suspect::new_boxed(name, bucket.take());
        if !clue.is_empty() {
            suspect.add_clue(clue);
        }
        *bucket = Some(suspect);
        self.len += 1;
        debug!(target: "suspect", "New suspect {:?} with clue {:?}", name, clue);
    }

    /// Iterates over every suspect, bucket by bucket and head to tail within
    /// a bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Suspect> {
        self.buckets.iter().flat_map(|bucket| {
            let mut current = bucket.as_deref();
            std::iter::from_fn(move || {
                let suspect = current?;
                current = suspect.next.as_deref();
                Some(suspect)
            })
        })
    }

    /// The suspect with the most clues, or `None` when no suspect has any.
    /// Ties go to whoever [`iter`][Self::iter] yields first.
    pub fn report_most_associated(&self) -> Option<&Suspect> {
        let mut most: Option<&Suspect> = None;
        let mut max = 0;
        for suspect in self.iter() {
            if suspect.clue_count > max {
                max = suspect.clue_count;
                most = Some(suspect);
            }
        }
        most
    }

    /// Removes every suspect, releasing each one's clues before the suspect
    /// itself. The buckets stay allocated.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            let mut current = bucket.take();
            while let Some(mut suspect) = current {
                suspect.clear_clues();
                trace!(target: "suspect", "Releasing suspect {:?}", suspect.name);
                current = suspect.next.take();
            }
        }
        self.len = 0;
    }
}

impl Drop for SuspectTable {
    fn drop(&mut self) {
        self.clear();
    }
}
