use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation-ordered identifier for a note, unique within one store.
///
/// Positional indexes are what operations take; the id only survives
/// deletions of other notes, so hosts can re-find a note after the list shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NoteId(pub u64);

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a note from already-trimmed, non-empty text.
    pub fn new(id: NoteId, text: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            text,
            favorite: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Trims user input, returning `None` when nothing is left to commit.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
