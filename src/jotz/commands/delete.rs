use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::NoteStore;

use super::helpers::{preview, resolve_indexes};

/// Deletes every selected note. All indexes are resolved against the list the
/// user saw, then removed from the highest position down so earlier removals
/// never shift a later target. Reports come back in the order given.
pub fn run(store: &mut NoteStore, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, indexes)?;
    let mut removal_order: Vec<usize> = (0..resolved.len()).collect();
    removal_order.sort_by(|&a, &b| resolved[b].1.cmp(&resolved[a].1));

    let mut removed = vec![None; resolved.len()];
    for slot in removal_order {
        removed[slot] = Some(store.delete(resolved[slot].1)?);
    }

    let mut result = CmdResult::default();
    let mut notes = Vec::with_capacity(resolved.len());
    for ((display_index, _), note) in resolved.into_iter().zip(removed.into_iter().flatten()) {
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            display_index,
            preview(&note.text)
        )));
        notes.push(note);
    }

    Ok(result.with_affected_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    fn texts(store: &NoteStore) -> Vec<&str> {
        store.notes().iter().map(|n| n.text.as_str()).collect()
    }

    #[test]
    fn removes_selected_note() {
        let mut store = StoreFixture::new().with_notes(&["A", "B", "C"]).store;
        let result = run(&mut store, &[DisplayIndex::Regular(2)]).unwrap();

        assert_eq!(texts(&store), vec!["A", "C"]);
        assert_eq!(result.affected_notes[0].text, "B");
        assert_eq!(result.messages[0].content, "Note deleted (2): B");
    }

    #[test]
    fn multiple_indexes_refer_to_same_render() {
        let mut store = StoreFixture::new().with_notes(&["A", "B", "C", "D"]).store;
        run(
            &mut store,
            &[DisplayIndex::Regular(1), DisplayIndex::Regular(3)],
        )
        .unwrap();

        assert_eq!(texts(&store), vec!["B", "D"]);
    }

    #[test]
    fn reports_follow_the_order_given() {
        let mut store = StoreFixture::new().with_notes(&["A", "B", "C"]).store;
        let result = run(
            &mut store,
            &[DisplayIndex::Regular(1), DisplayIndex::Regular(3)],
        )
        .unwrap();

        let messages: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(messages, vec!["Note deleted (1): A", "Note deleted (3): C"]);
        let affected: Vec<_> = result.affected_notes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(affected, vec!["A", "C"]);
        assert_eq!(texts(&store), vec!["B"]);
    }

    #[test]
    fn favorite_selector_deletes_from_full_list() {
        let mut store = StoreFixture::new()
            .with_notes(&["A"])
            .with_favorite("B")
            .store;
        run(&mut store, &[DisplayIndex::Favorite(1)]).unwrap();
        assert_eq!(texts(&store), vec!["A"]);
    }

    #[test]
    fn stale_index_deletes_nothing() {
        let mut store = StoreFixture::new().with_notes(&["A", "B"]).store;
        let err = run(
            &mut store,
            &[DisplayIndex::Regular(1), DisplayIndex::Regular(5)],
        );
        assert!(err.is_err());
        assert_eq!(store.len(), 2);
    }
}
