use crate::commands::{CmdMessage, CmdResult};
use crate::edit::EditState;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{NoteStore, SaveOutcome};

use super::helpers::preview;

pub fn start(store: &mut NoteStore, index: DisplayIndex) -> Result<CmdResult> {
    let position = index.resolve(store)?;
    let previous = store.start_edit(position)?;

    let mut result = CmdResult::default();
    if let EditState::Editing {
        index: abandoned, ..
    } = previous
    {
        if abandoned != position {
            result.add_message(CmdMessage::warning(format!(
                "Unsaved edit of note {} discarded.",
                DisplayIndex::of_position(abandoned)
            )));
        }
    }
    result.add_message(CmdMessage::info(format!(
        "Editing note {}. Use `set` to change the text, then `save` or `cancel`.",
        DisplayIndex::of_position(position)
    )));
    Ok(result)
}

pub fn set_buffer(store: &mut NoteStore, text: &str) -> CmdResult {
    let mut result = CmdResult::default();
    if !store.set_edit_buffer(text) {
        result.add_message(CmdMessage::warning("No note is being edited."));
    }
    result
}

/// Saves the open edit into `index`. Without an index the note currently
/// under edit is used; with nothing under edit there is nothing to save.
pub fn save(store: &mut NoteStore, index: Option<DisplayIndex>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let position = match index {
        Some(idx) => idx.resolve(store)?,
        None => match store.edit_state().index() {
            Some(position) => position,
            None => {
                result.add_message(CmdMessage::warning("No note is being edited."));
                return Ok(result);
            }
        },
    };

    match store.save_edit(position)? {
        SaveOutcome::Saved => {
            let Some(note) = store.get(position).cloned() else {
                return Ok(result);
            };
            result.add_message(CmdMessage::success(format!(
                "Note updated ({}): {}",
                DisplayIndex::of_position(position),
                preview(&note.text)
            )));
            result.affected_notes.push(note);
        }
        SaveOutcome::Discarded => {
            result.add_message(CmdMessage::info("Empty edit discarded; note kept."));
        }
    }
    Ok(result)
}

pub fn cancel(store: &mut NoteStore) -> CmdResult {
    let mut result = CmdResult::default();
    match store.cancel_edit() {
        EditState::Editing { index, .. } => result.add_message(CmdMessage::info(format!(
            "Edit of note {} cancelled.",
            DisplayIndex::of_position(index)
        ))),
        EditState::Idle => result.add_message(CmdMessage::info("Nothing to cancel.")),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn start_then_cancel_keeps_text() {
        let mut store = StoreFixture::new().with_notes(&["A"]).store;
        start(&mut store, DisplayIndex::Regular(1)).unwrap();
        set_buffer(&mut store, "changed");
        let result = cancel(&mut store);

        assert_eq!(store.notes()[0].text, "A");
        assert!(store.edit_state().is_idle());
        assert_eq!(result.messages[0].content, "Edit of note 1 cancelled.");
    }

    #[test]
    fn save_without_index_targets_open_edit() {
        let mut store = StoreFixture::new().with_notes(&["A", "Call Bob"]).store;
        start(&mut store, DisplayIndex::Regular(2)).unwrap();
        set_buffer(&mut store, "Call Bob tomorrow");
        let result = save(&mut store, None).unwrap();

        assert_eq!(store.notes()[1].text, "Call Bob tomorrow");
        assert_eq!(result.affected_notes.len(), 1);
        assert!(store.edit_state().is_idle());
    }

    #[test]
    fn blank_save_keeps_text_and_exits() {
        let mut store = StoreFixture::new().with_notes(&["A"]).store;
        start(&mut store, DisplayIndex::Regular(1)).unwrap();
        set_buffer(&mut store, "  ");
        let result = save(&mut store, None).unwrap();

        assert_eq!(store.notes()[0].text, "A");
        assert!(store.edit_state().is_idle());
        assert!(result.affected_notes.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn save_with_nothing_open_warns() {
        let mut store = StoreFixture::new().with_notes(&["A"]).store;
        let result = save(&mut store, None).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.notes()[0].text, "A");
    }

    #[test]
    fn switching_edits_reports_abandoned_buffer() {
        let mut store = StoreFixture::new().with_notes(&["A", "B"]).store;
        start(&mut store, DisplayIndex::Regular(1)).unwrap();
        let result = start(&mut store, DisplayIndex::Regular(2)).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(store.edit_state().is_editing(1));
    }

    #[test]
    fn set_buffer_when_idle_warns() {
        let mut store = StoreFixture::new().with_notes(&["A"]).store;
        let result = set_buffer(&mut store, "x");
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn start_on_stale_index_fails() {
        let mut store = StoreFixture::new().with_notes(&["A"]).store;
        assert!(start(&mut store, DisplayIndex::Regular(2)).is_err());
        assert!(store.edit_state().is_idle());
    }
}
