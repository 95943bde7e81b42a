use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::NoteStore;

/// Resolves every index against the current list before anything changes.
/// Duplicates (`1` and `f1` naming the same note) collapse to one entry.
pub fn resolve_indexes(
    store: &NoteStore,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, usize)>> {
    let mut resolved: Vec<(DisplayIndex, usize)> = Vec::with_capacity(indexes.len());
    for idx in indexes {
        let position = idx.resolve(store)?;
        if !resolved.iter().any(|(_, p)| *p == position) {
            resolved.push((*idx, position));
        }
    }
    Ok(resolved)
}

/// Short single-line preview of a note for messages.
pub fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() > MAX_CHARS || first_line.len() < text.len() {
        let cut: String = first_line.chars().take(MAX_CHARS).collect();
        format!("{}…", cut)
    } else {
        first_line.to_string()
    }
}
