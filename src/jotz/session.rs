//! # Sessions
//!
//! A [`Session`] is one user's isolated workspace: a [`NoteStore`] plus the
//! pending "new note" text (the draft). The [`SessionRegistry`] is the
//! in-memory mapping from session id to session that a host keeps for as long
//! as it runs. Nothing is shared between sessions.

use crate::error::{JotzError, Result};
use crate::store::NoteStore;
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub store: NoteStore,
    draft: String,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            store: NoteStore::new(),
            draft: String::new(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Commits the draft as a new note and clears the draft whether or not
    /// anything was added.
    pub fn add_draft(&mut self) -> Option<usize> {
        let draft = std::mem::take(&mut self.draft);
        self.store.add(&draft)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Vec<Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) -> Uuid {
        let session = Session::new();
        let id = session.id;
        debug!(session = %id, "session opened");
        self.sessions.push(session);
        id
    }

    pub fn get(&self, id: Uuid) -> Result<&Session> {
        self.sessions
            .iter()
            .find(|s| s.id == id)
            .ok_or(JotzError::SessionNotFound(id))
    }

    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut Session> {
        self.sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(JotzError::SessionNotFound(id))
    }

    /// Drops the session and everything in it.
    pub fn close(&mut self, id: Uuid) -> Result<Session> {
        let pos = self
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(JotzError::SessionNotFound(id))?;
        debug!(session = %id, "session closed");
        Ok(self.sessions.remove(pos))
    }

    /// Session ids in the order they were opened.
    pub fn ids(&self) -> Vec<Uuid> {
        self.sessions.iter().map(|s| s.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
