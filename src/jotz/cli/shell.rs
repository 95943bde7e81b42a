//! # Shell Host
//!
//! The interactive loop that plays the presentation layer for one user. Each
//! input line is one action: it is parsed, dispatched to the API against the
//! active session, and followed by a full re-render of the frame.
//!
//! The shell also holds the current file selection, the way a file picker
//! widget holds its files. Selecting again replaces it; sessions never see it.

use super::render::{
    format_time_ago, render_files, render_frame, render_messages, render_sessions,
    RenderOptions, SessionLine,
};
use super::setup::{
    action_text, get_grouped_help, help_for_action, parse_line, Action, EditActions, FileActions, MiscActions,
    NoteActions, SessionAction,
};
use jotz::api::{CmdMessage, CmdResult, JotzApi};
use jotz::config::JotzConfig;
use jotz::error::{JotzError, Result};
use jotz::uploads::FileSelection;
use std::io::{self, BufRead, Write};
use tracing::debug;
use uuid::Uuid;

const PROMPT: &str = "jotz> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What one action produced, in print order: frame, extra output, messages.
struct Outcome {
    rerender: bool,
    output: Option<String>,
    result: CmdResult,
    flow: Flow,
}

impl Outcome {
    fn rerender(result: CmdResult) -> Self {
        Self {
            rerender: true,
            output: None,
            result,
            flow: Flow::Continue,
        }
    }

    fn output(output: String, result: CmdResult) -> Self {
        Self {
            rerender: false,
            output: Some(output),
            result,
            flow: Flow::Continue,
        }
    }

    fn quit() -> Self {
        Self {
            rerender: false,
            output: None,
            result: CmdResult::default(),
            flow: Flow::Quit,
        }
    }
}

pub struct Shell {
    api: JotzApi,
    active: Uuid,
    files: FileSelection,
    config: JotzConfig,
    use_color: bool,
    interactive: bool,
}

impl Shell {
    pub fn new(mut api: JotzApi, config: JotzConfig, use_color: bool) -> Self {
        let active = api.open_session();
        Self {
            api,
            active,
            files: FileSelection::default(),
            config,
            use_color,
            interactive: false,
        }
    }

    /// Show a prompt before each line (for terminals).
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn run<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        self.print_frame(out)?;

        loop {
            if self.interactive {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if self.handle_line(&line, out, err)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let action = match parse_line(line) {
            Ok(action) => action,
            Err(e) => {
                let first = e.to_string();
                let first = first.lines().next().unwrap_or_default();
                writeln!(err, "{} (type `help` for actions)", first)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?action, "dispatching");
        match self.dispatch(action, action_text(line)) {
            Ok(outcome) => {
                if outcome.rerender {
                    self.print_frame(out)?;
                }
                if let Some(output) = &outcome.output {
                    write!(out, "{}", output)?;
                }
                write!(
                    out,
                    "{}",
                    render_messages(&outcome.result.messages, self.use_color)
                )?;
                Ok(outcome.flow)
            }
            Err(e) => {
                debug!(error = %e, "action failed");
                let message = CmdMessage::error(format!("Error: {}", e));
                write!(err, "{}", render_messages(&[message], self.use_color))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn print_frame<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let opts = RenderOptions {
            use_color: self.use_color,
            show_timestamps: self.config.show_timestamps,
        };
        match self.api.view(self.active) {
            Ok(result) => {
                if let Some(frame) = &result.frame {
                    write!(out, "{}", render_frame(frame, opts))?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "Error: {}", e),
        }
    }

    /// `text` is the raw remainder of the line, used by actions taking note text.
    fn dispatch(&mut self, action: Action, text: &str) -> Result<Outcome> {
        let s = self.active;
        match action {
            Action::Note(cmd) => match cmd {
                NoteActions::Add { .. } => Ok(Outcome::rerender(self.api.add_note(s, text)?)),
                NoteActions::Delete { indexes } => {
                    Ok(Outcome::rerender(self.api.delete_notes(s, &indexes)?))
                }
                NoteActions::Fav { indexes } => {
                    Ok(Outcome::rerender(self.api.toggle_favorites(s, &indexes)?))
                }
                NoteActions::List { json } => {
                    let result = self.api.view(s)?;
                    if json {
                        let frame = result.frame.unwrap_or_default();
                        let mut json_text = serde_json::to_string_pretty(&frame)?;
                        json_text.push('\n');
                        Ok(Outcome::output(json_text, CmdResult::default()))
                    } else {
                        Ok(Outcome::rerender(CmdResult::default()))
                    }
                }
            },
            Action::Edit(cmd) => match cmd {
                EditActions::Edit { index } => Ok(Outcome::rerender(self.api.start_edit(s, &index)?)),
                EditActions::Set { .. } => {
                    Ok(Outcome::rerender(self.api.set_edit_buffer(s, text)?))
                }
                EditActions::Save { text: words } => {
                    if !words.is_empty() {
                        let set = self.api.set_edit_buffer(s, text)?;
                        if !set.messages.is_empty() {
                            return Ok(Outcome::rerender(set));
                        }
                    }
                    Ok(Outcome::rerender(self.api.save_edit(s, None)?))
                }
                EditActions::Cancel => Ok(Outcome::rerender(self.api.cancel_edit(s)?)),
            },
            Action::Files(cmd) => match cmd {
                FileActions::Upload { paths } => {
                    let (selection, result) = self.api.select_files(&paths)?;
                    self.files = selection;
                    Ok(Outcome::output(
                        render_files(&result.files, self.use_color),
                        result,
                    ))
                }
                FileActions::Files => {
                    let result = self.api.list_files(&self.files);
                    Ok(Outcome::output(
                        render_files(&result.files, self.use_color),
                        result,
                    ))
                }
                FileActions::Download { number, dest } => {
                    let dest = dest.unwrap_or_else(|| self.config.download_dir.clone());
                    let result = self.api.download_file(&self.files, number, &dest)?;
                    Ok(Outcome::output(String::new(), result))
                }
            },
            Action::Misc(cmd) => match cmd {
                MiscActions::Session { action } => self.dispatch_session(action),
                MiscActions::Help { command } => {
                    let text = match command {
                        Some(name) => help_for_action(&name),
                        None => get_grouped_help(),
                    };
                    Ok(Outcome::output(text, CmdResult::default()))
                }
                MiscActions::Quit => Ok(Outcome::quit()),
            },
        }
    }

    fn dispatch_session(&mut self, action: Option<SessionAction>) -> Result<Outcome> {
        let mut result = CmdResult::default();
        match action.unwrap_or(SessionAction::List) {
            SessionAction::List => {
                return Ok(Outcome::output(self.render_session_list(), result));
            }
            SessionAction::New => {
                self.active = self.api.open_session();
                result.add_message(CmdMessage::success(format!(
                    "Session {} opened.",
                    self.api.sessions().len()
                )));
            }
            SessionAction::Use { number } => {
                let ids = self.api.sessions().ids();
                self.active = number
                    .checked_sub(1)
                    .and_then(|i| ids.get(i).copied())
                    .ok_or(JotzError::SessionNumberNotFound(number))?;
                result.add_message(CmdMessage::info(format!("Switched to session {}.", number)));
            }
            SessionAction::Close => {
                self.api.close_session(self.active)?;
                self.active = match self.api.sessions().ids().last() {
                    Some(id) => *id,
                    None => self.api.open_session(),
                };
                result.add_message(CmdMessage::success("Session closed."));
            }
        }
        Ok(Outcome::rerender(result))
    }

    fn render_session_list(&self) -> String {
        let lines = self
            .api
            .sessions()
            .iter()
            .enumerate()
            .map(|(i, session)| SessionLine {
                number: i + 1,
                id: session.id,
                notes: format!("{} note(s)", session.store.len()),
                age: format_time_ago(session.created_at).trim().to_string(),
                active: session.id == self.active,
            })
            .collect();
        render_sessions(lines, self.use_color)
    }
}
