//! # Display Indexes
//!
//! Users never see the zero-based positions the store works with. Every note
//! is shown with a 1-based number, and the favorites view can additionally be
//! addressed by its own 1-based count:
//!
//! - `3` is the third note in the full list (position 2).
//! - `f1` is the first favorite, whatever its position in the full list.
//!
//! Favorites are rendered with their full-list number, so `f1` and the number
//! shown next to it always resolve to the same note.
//!
//! Resolution happens against the store as it is right now. Since hosts
//! re-render after every action, a number taken from the screen resolves to the
//! note the user saw.

use crate::error::{JotzError, Result};
use crate::store::NoteStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Regular(usize),
    Favorite(usize),
}

impl DisplayIndex {
    /// Display number for a store position.
    pub fn of_position(index: usize) -> Self {
        DisplayIndex::Regular(index + 1)
    }

    /// Translates to a store position, failing if the list no longer has it.
    pub fn resolve(&self, store: &NoteStore) -> Result<usize> {
        let position = match *self {
            DisplayIndex::Regular(n) => n.checked_sub(1).filter(|i| *i < store.len()),
            DisplayIndex::Favorite(n) => n
                .checked_sub(1)
                .and_then(|k| store.favorites().nth(k))
                .map(|(i, _)| i),
        };
        position.ok_or_else(|| JotzError::NoteNotFound(self.to_string()))
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Regular(i) => write!(f, "{}", i),
            DisplayIndex::Favorite(i) => write!(f, "f{}", i),
        }
    }
}

impl std::str::FromStr for DisplayIndex {
    type Err = JotzError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (ctor, digits): (fn(usize) -> DisplayIndex, &str) = match s.strip_prefix('f') {
            Some(rest) => (DisplayIndex::Favorite, rest),
            None => (DisplayIndex::Regular, s),
        };
        match digits.parse::<usize>() {
            Ok(n) if n > 0 => Ok(ctor(n)),
            _ => Err(JotzError::InvalidIndex(s.to_string())),
        }
    }
}

/// Parses every input or fails on the first bad one.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
