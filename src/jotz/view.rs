//! # Render Model
//!
//! [`Frame`] is what a host draws after every action: the favorites view, the
//! full list, and for each row the actions it offers. Building a frame never
//! mutates anything.
//!
//! The note under edit is shown as an edit row (buffer plus save/cancel) in
//! every view it appears in. Each action carries a key unique across the
//! whole frame, so two rows with identical text stay distinguishable.

use crate::edit::EditState;
use crate::index::DisplayIndex;
use crate::model::{Note, NoteId};
use crate::store::NoteStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const EMPTY_FAVORITES: &str = "No favorite notes yet.";
pub const EMPTY_NOTES: &str = "No notes yet. Add one!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Favorites,
    All,
}

impl ViewKind {
    fn key_prefix(&self) -> &'static str {
        match self {
            ViewKind::Favorites => "fav",
            ViewKind::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Delete,
    ToggleFavorite,
    StartEdit,
    SaveEdit,
    CancelEdit,
}

impl ActionKind {
    pub fn slug(&self) -> &'static str {
        match self {
            ActionKind::Delete => "delete",
            ActionKind::ToggleFavorite => "favorite",
            ActionKind::StartEdit => "edit",
            ActionKind::SaveEdit => "save",
            ActionKind::CancelEdit => "cancel",
        }
    }
}

/// One affordance on a row, bound to the index it was rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowAction {
    pub kind: ActionKind,
    pub index: usize,
    pub key: String,
}

impl RowAction {
    fn new(view: ViewKind, kind: ActionKind, index: usize) -> Self {
        Self {
            kind,
            index,
            key: format!("{}-{}-{}", view.key_prefix(), kind.slug(), index + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NoteRow {
    Display {
        index: usize,
        number: String,
        id: NoteId,
        text: String,
        favorite: bool,
        created_at: DateTime<Utc>,
        actions: Vec<RowAction>,
    },
    Editing {
        index: usize,
        number: String,
        buffer: String,
        actions: Vec<RowAction>,
    },
}

impl NoteRow {
    pub fn index(&self) -> usize {
        match self {
            NoteRow::Display { index, .. } | NoteRow::Editing { index, .. } => *index,
        }
    }

    pub fn actions(&self) -> &[RowAction] {
        match self {
            NoteRow::Display { actions, .. } | NoteRow::Editing { actions, .. } => actions,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, NoteRow::Editing { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub favorites: Vec<NoteRow>,
    pub notes: Vec<NoteRow>,
    pub editing: Option<usize>,
}

impl Frame {
    pub fn build(store: &NoteStore) -> Self {
        let edit = store.edit_state();
        let favorites = store
            .favorites()
            .map(|(i, note)| row(ViewKind::Favorites, i, note, edit))
            .collect();
        let notes = store
            .notes()
            .iter()
            .enumerate()
            .map(|(i, note)| row(ViewKind::All, i, note, edit))
            .collect();

        Self {
            favorites,
            notes,
            editing: edit.index(),
        }
    }

    /// Every action key in the frame, favorites first.
    pub fn action_keys(&self) -> impl Iterator<Item = &str> {
        self.favorites
            .iter()
            .chain(self.notes.iter())
            .flat_map(|r| r.actions().iter().map(|a| a.key.as_str()))
    }
}

fn row(view: ViewKind, index: usize, note: &Note, edit: &EditState) -> NoteRow {
    let number = DisplayIndex::of_position(index).to_string();
    if edit.is_editing(index) {
        return NoteRow::Editing {
            index,
            number,
            buffer: edit.buffer().to_string(),
            actions: vec![
                RowAction::new(view, ActionKind::SaveEdit, index),
                RowAction::new(view, ActionKind::CancelEdit, index),
            ],
        };
    }

    NoteRow::Display {
        index,
        number,
        id: note.id,
        text: note.text.clone(),
        favorite: note.favorite,
        created_at: note.created_at,
        actions: [
            ActionKind::Delete,
            ActionKind::ToggleFavorite,
            ActionKind::StartEdit,
        ]
        .into_iter()
        .map(|kind| RowAction::new(view, kind, index))
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use std::collections::HashSet;

    #[test]
    fn empty_store_builds_empty_frame() {
        let frame = Frame::build(&NoteStore::new());
        assert!(frame.favorites.is_empty());
        assert!(frame.notes.is_empty());
        assert_eq!(frame.editing, None);
    }

    #[test]
    fn favorites_view_is_order_preserving_filter() {
        let store = StoreFixture::new()
            .with_favorite("A")
            .with_notes(&["B"])
            .with_favorite("C")
            .store;
        let frame = Frame::build(&store);

        let fav_indexes: Vec<_> = frame.favorites.iter().map(NoteRow::index).collect();
        assert_eq!(fav_indexes, vec![0, 2]);
        assert_eq!(frame.notes.len(), 3);
    }

    #[test]
    fn favorite_rows_keep_full_list_number() {
        let store = StoreFixture::new()
            .with_notes(&["A"])
            .with_favorite("B")
            .store;
        let frame = Frame::build(&store);

        match &frame.favorites[0] {
            NoteRow::Display { number, text, .. } => {
                assert_eq!(number, "2");
                assert_eq!(text, "B");
            }
            other => panic!("unexpected row {other:?}"),
        }
    }

    #[test]
    fn edited_note_renders_as_edit_row_in_both_views() {
        let mut store = StoreFixture::new().with_favorite("A").with_notes(&["B"]).store;
        store.start_edit(0).unwrap();
        store.set_edit_buffer("A!");
        let frame = Frame::build(&store);

        assert_eq!(frame.editing, Some(0));
        assert!(frame.favorites[0].is_editing());
        assert!(frame.notes[0].is_editing());
        assert!(!frame.notes[1].is_editing());
        match &frame.notes[0] {
            NoteRow::Editing { buffer, actions, .. } => {
                assert_eq!(buffer, "A!");
                let kinds: Vec<_> = actions.iter().map(|a| a.kind).collect();
                assert_eq!(kinds, vec![ActionKind::SaveEdit, ActionKind::CancelEdit]);
            }
            other => panic!("unexpected row {other:?}"),
        }
    }

    #[test]
    fn action_keys_are_unique_for_identical_rows() {
        let store = StoreFixture::new()
            .with_favorite("same")
            .with_favorite("same")
            .with_notes(&["same"])
            .store;
        let frame = Frame::build(&store);

        let keys: Vec<_> = frame.action_keys().collect();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());
        assert!(keys.contains(&"fav-delete-1"));
        assert!(keys.contains(&"all-delete-1"));
    }

    #[test]
    fn actions_are_bound_to_row_index() {
        let store = StoreFixture::new().with_notes(&["A", "B"]).store;
        let frame = Frame::build(&store);
        assert!(frame.notes[1].actions().iter().all(|a| a.index == 1));
    }
}
