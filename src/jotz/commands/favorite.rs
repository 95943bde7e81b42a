use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::NoteStore;

use super::helpers::{preview, resolve_indexes};

pub fn toggle(store: &mut NoteStore, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, indexes)?;
    let mut result = CmdResult::default();

    for (display_index, position) in resolved {
        let favorite = store.toggle_favorite(position)?;
        let Some(note) = store.get(position).cloned() else {
            continue;
        };

        let verb = if favorite { "favorited" } else { "unfavorited" };
        result.add_message(CmdMessage::success(format!(
            "Note {} ({}): {}",
            verb,
            display_index,
            preview(&note.text)
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn toggling_twice_restores_flag() {
        let mut store = StoreFixture::new().with_notes(&["A"]).store;
        let idx = [DisplayIndex::Regular(1)];

        let first = toggle(&mut store, &idx).unwrap();
        assert!(first.affected_notes[0].favorite);
        assert_eq!(first.messages[0].content, "Note favorited (1): A");

        let second = toggle(&mut store, &idx).unwrap();
        assert!(!second.affected_notes[0].favorite);
        assert!(!store.notes()[0].favorite);
    }

    #[test]
    fn unfavorite_through_favorites_view() {
        let mut store = StoreFixture::new()
            .with_notes(&["A"])
            .with_favorite("B")
            .store;
        let result = toggle(&mut store, &[DisplayIndex::Favorite(1)]).unwrap();

        assert_eq!(result.messages[0].content, "Note unfavorited (f1): B");
        assert_eq!(store.favorites().count(), 0);
    }

    #[test]
    fn out_of_range_fails() {
        let mut store = StoreFixture::new().with_notes(&["A"]).store;
        assert!(toggle(&mut store, &[DisplayIndex::Regular(2)]).is_err());
        assert!(!store.notes()[0].favorite);
    }
}
