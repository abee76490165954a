//! The crate's error type.

use std::collections::TryReserveError;
use std::io;

/// Everything that can go wrong while setting up or playing the game.
///
/// Duplicate clues, invalid directions and missing doors are part of normal
/// play and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Memory for the suspect table could not be reserved.
    #[error("failed to allocate suspect table: {0}")]
    Allocation(#[from] TryReserveError),
    /// A suspect table needs at least one bucket.
    #[error("suspect table size must be positive")]
    InvalidTableSize,
    /// Writing to the console failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
