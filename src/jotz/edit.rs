//! Single-slot edit session.
//!
//! Only one note can be under edit at a time. Starting an edit while another is
//! open replaces it and its unsaved buffer is dropped (last edit wins).

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditState {
    #[default]
    Idle,
    Editing { index: usize, buffer: String },
}

impl EditState {
    pub fn editing(index: usize, buffer: impl Into<String>) -> Self {
        EditState::Editing {
            index,
            buffer: buffer.into(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditState::Idle)
    }

    /// Index of the note being edited, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            EditState::Idle => None,
            EditState::Editing { index, .. } => Some(*index),
        }
    }

    pub fn is_editing(&self, index: usize) -> bool {
        self.index() == Some(index)
    }

    /// Current buffer contents; empty when idle.
    pub fn buffer(&self) -> &str {
        match self {
            EditState::Idle => "",
            EditState::Editing { buffer, .. } => buffer,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match self {
            EditState::Idle => None,
            EditState::Editing { buffer, .. } => Some(buffer),
        }
    }

    /// Resets to idle, handing back whatever buffer was open.
    pub fn take(&mut self) -> EditState {
        std::mem::take(self)
    }

    /// Keeps the edit pointed at the same note after the note at `removed`
    /// is deleted. Editing the removed note itself ends the session.
    pub(crate) fn note_removed(&mut self, removed: usize) {
        if let EditState::Editing { index, .. } = self {
            if *index == removed {
                *self = EditState::Idle;
            } else if *index > removed {
                *index -= 1;
            }
        }
    }
}
