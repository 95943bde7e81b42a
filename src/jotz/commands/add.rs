use crate::commands::{CmdMessage, CmdResult};
use crate::index::DisplayIndex;
use crate::session::Session;

use super::helpers::preview;

/// Puts `raw` in the session draft and commits it. The draft is empty
/// afterwards even when the text was blank and nothing was added.
pub fn run(session: &mut Session, raw: &str) -> CmdResult {
    session.set_draft(raw);
    commit_draft(session)
}

pub fn commit_draft(session: &mut Session) -> CmdResult {
    let mut result = CmdResult::default();
    match session.add_draft() {
        Some(index) => {
            let Some(note) = session.store.get(index).cloned() else {
                return result;
            };
            result.add_message(CmdMessage::success(format!(
                "Note added ({}): {}",
                DisplayIndex::of_position(index),
                preview(&note.text)
            )));
            result.affected_notes.push(note);
        }
        None => result.add_message(CmdMessage::info("Empty note ignored.")),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn adds_note_at_end() {
        let mut session = Session::new();
        run(&mut session, "A");
        let result = run(&mut session, "  B  ");

        assert_eq!(session.store.len(), 2);
        assert_eq!(result.affected_notes[0].text, "B");
        assert_eq!(result.messages[0].content, "Note added (2): B");
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn blank_input_is_reported_not_failed() {
        let mut session = Session::new();
        let result = run(&mut session, "   ");

        assert!(session.store.is_empty());
        assert!(result.affected_notes.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(session.draft(), "");
    }

    #[test]
    fn commit_draft_uses_pending_text() {
        let mut session = Session::new();
        session.set_draft("pending");
        commit_draft(&mut session);
        assert_eq!(session.store.notes()[0].text, "pending");
    }
}
