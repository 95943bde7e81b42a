//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for hosts. It owns the [`SessionRegistry`], so every call names the
//! session it acts on.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (display index strings to [`DisplayIndex`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never decides presentation. Hosts call [`JotzApi::view`]
//! after every action to get the frame to draw.
//!
//! Uploaded files are deliberately outside the registry: [`JotzApi::select_files`]
//! hands the selection back to the host, which keeps it for as long as its file
//! picker would.

use crate::commands;
use crate::error::Result;
use crate::index::{parse_indexes, DisplayIndex};
use crate::session::{Session, SessionRegistry};
use crate::uploads::FileSelection;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct JotzApi {
    sessions: SessionRegistry,
    config_dir: PathBuf,
}

impl JotzApi {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            config_dir,
        }
    }

    pub fn open_session(&mut self) -> Uuid {
        self.sessions.open()
    }

    pub fn close_session(&mut self, session: Uuid) -> Result<()> {
        self.sessions.close(session).map(|_| ())
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn session(&self, session: Uuid) -> Result<&Session> {
        self.sessions.get(session)
    }

    pub fn add_note(&mut self, session: Uuid, raw: &str) -> Result<commands::CmdResult> {
        let session = self.sessions.get_mut(session)?;
        Ok(commands::add::run(session, raw))
    }

    /// Updates the pending new-note text without committing it.
    pub fn set_draft(&mut self, session: Uuid, text: &str) -> Result<()> {
        self.sessions.get_mut(session)?.set_draft(text);
        Ok(())
    }

    pub fn commit_draft(&mut self, session: Uuid) -> Result<commands::CmdResult> {
        let session = self.sessions.get_mut(session)?;
        Ok(commands::add::commit_draft(session))
    }

    pub fn delete_notes<I: AsRef<str>>(
        &mut self,
        session: Uuid,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        let session = self.sessions.get_mut(session)?;
        commands::delete::run(&mut session.store, &indexes)
    }

    pub fn toggle_favorites<I: AsRef<str>>(
        &mut self,
        session: Uuid,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        let session = self.sessions.get_mut(session)?;
        commands::favorite::toggle(&mut session.store, &indexes)
    }

    pub fn start_edit(&mut self, session: Uuid, index: &str) -> Result<commands::CmdResult> {
        let index: DisplayIndex = index.parse()?;
        let session = self.sessions.get_mut(session)?;
        commands::edit::start(&mut session.store, index)
    }

    pub fn set_edit_buffer(&mut self, session: Uuid, text: &str) -> Result<commands::CmdResult> {
        let session = self.sessions.get_mut(session)?;
        Ok(commands::edit::set_buffer(&mut session.store, text))
    }

    pub fn save_edit(
        &mut self,
        session: Uuid,
        index: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let index = index.map(str::parse::<DisplayIndex>).transpose()?;
        let session = self.sessions.get_mut(session)?;
        commands::edit::save(&mut session.store, index)
    }

    pub fn cancel_edit(&mut self, session: Uuid) -> Result<commands::CmdResult> {
        let session = self.sessions.get_mut(session)?;
        Ok(commands::edit::cancel(&mut session.store))
    }

    pub fn view(&self, session: Uuid) -> Result<commands::CmdResult> {
        let session = self.sessions.get(session)?;
        Ok(commands::view::run(&session.store))
    }

    pub fn select_files<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<(FileSelection, commands::CmdResult)> {
        commands::files::select(paths)
    }

    pub fn list_files(&self, selection: &FileSelection) -> commands::CmdResult {
        commands::files::list(selection)
    }

    pub fn download_file(
        &self,
        selection: &FileSelection,
        number: usize,
        dest: &Path,
    ) -> Result<commands::CmdResult> {
        commands::files::download(selection, number, dest)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
