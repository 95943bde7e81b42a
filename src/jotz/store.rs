//! # Note Store
//!
//! [`NoteStore`] owns the ordered note list of one session together with its
//! [`EditState`]. It is purely in memory; nothing here survives the session.
//!
//! ## Positional identity
//!
//! Every operation addresses notes by their position in the list. Deleting a
//! note shifts every later note down by one, so indexes held from an earlier
//! render are stale afterwards. Hosts re-render after every mutation and only
//! ever act on indexes taken from the latest render.
//!
//! An out-of-range index is a contract violation and comes back as
//! [`JotzError::IndexOutOfRange`]. Empty input is not an error: `add` and
//! `save_edit` simply decline to commit whitespace.

use crate::edit::EditState;
use crate::error::{JotzError, Result};
use crate::model::{normalize_text, Note, NoteId};
use chrono::Utc;
use tracing::debug;

#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    edit: EditState,
    next_id: u64,
}

/// What became of a `save_edit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The trimmed buffer replaced the note text.
    Saved,
    /// The buffer was blank; the note kept its previous text.
    Discarded,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Current position of the note with the given id.
    pub fn index_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// Favorite notes with their positions, in list order.
    pub fn favorites(&self) -> impl Iterator<Item = (usize, &Note)> {
        self.notes.iter().enumerate().filter(|(_, n)| n.favorite)
    }

    /// Appends a note built from `raw` once trimmed. Blank input is ignored and
    /// `None` is returned; otherwise the new note's index.
    pub fn add(&mut self, raw: &str) -> Option<usize> {
        let text = normalize_text(raw)?;
        self.next_id += 1;
        let note = Note::new(NoteId(self.next_id), text);
        debug!(id = %note.id, "note added");
        self.notes.push(note);
        Some(self.notes.len() - 1)
    }

    pub fn delete(&mut self, index: usize) -> Result<Note> {
        self.check_index(index)?;
        let note = self.notes.remove(index);
        self.edit.note_removed(index);
        debug!(index, id = %note.id, "note deleted");
        Ok(note)
    }

    /// Flips the favorite flag, returning the new value.
    pub fn toggle_favorite(&mut self, index: usize) -> Result<bool> {
        let note = self.note_mut(index)?;
        note.favorite = !note.favorite;
        debug!(index, favorite = note.favorite, "favorite toggled");
        Ok(note.favorite)
    }

    /// Opens an edit session on `index` seeded with the note text. Returns the
    /// edit state it replaced so callers can tell when a buffer was abandoned.
    pub fn start_edit(&mut self, index: usize) -> Result<EditState> {
        let text = self.note(index)?.text.clone();
        let previous = std::mem::replace(&mut self.edit, EditState::editing(index, text));
        debug!(index, "edit started");
        Ok(previous)
    }

    /// Replaces the edit buffer. Returns `false` when no edit is open.
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) -> bool {
        match self.edit.buffer_mut() {
            Some(buffer) => {
                *buffer = text.into();
                true
            }
            None => false,
        }
    }

    /// Commits the trimmed edit buffer into the note at `index`, keeping the old
    /// text when the buffer is blank. Edit mode is left either way.
    pub fn save_edit(&mut self, index: usize) -> Result<SaveOutcome> {
        self.check_index(index)?;
        let previous = self.edit.take();
        let outcome = match normalize_text(previous.buffer()) {
            Some(text) => {
                let note = &mut self.notes[index];
                note.text = text;
                note.updated_at = Utc::now();
                SaveOutcome::Saved
            }
            None => SaveOutcome::Discarded,
        };
        debug!(index, ?outcome, "edit saved");
        Ok(outcome)
    }

    /// Leaves edit mode without touching any note.
    pub fn cancel_edit(&mut self) -> EditState {
        debug!("edit cancelled");
        self.edit.take()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.notes.len() {
            Ok(())
        } else {
            Err(JotzError::IndexOutOfRange {
                index,
                len: self.notes.len(),
            })
        }
    }

    fn note(&self, index: usize) -> Result<&Note> {
        self.check_index(index)?;
        Ok(&self.notes[index])
    }

    fn note_mut(&mut self, index: usize) -> Result<&mut Note> {
        self.check_index(index)?;
        Ok(&mut self.notes[index])
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: NoteStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::new(),
            }
        }

        pub fn with_notes(mut self, texts: &[&str]) -> Self {
            for text in texts {
                self.store.add(text);
            }
            self
        }

        pub fn with_favorite(mut self, text: &str) -> Self {
            if let Some(index) = self.store.add(text) {
                self.store.notes[index].favorite = true;
            }
            self
        }
    }
}
