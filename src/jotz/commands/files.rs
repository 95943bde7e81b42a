use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::uploads::FileSelection;
use std::path::Path;

/// Reads the chosen paths into a fresh selection. The caller keeps it; no
/// session ever sees the bytes.
pub fn select<P: AsRef<Path>>(paths: &[P]) -> Result<(FileSelection, CmdResult)> {
    let selection = FileSelection::from_paths(paths)?;
    let mut result = list(&selection);
    result.add_message(CmdMessage::success(format!(
        "{} file(s) selected.",
        selection.len()
    )));
    Ok((selection, result))
}

pub fn list(selection: &FileSelection) -> CmdResult {
    let mut result = CmdResult::default().with_files(selection.entries());
    if selection.is_empty() {
        result.add_message(CmdMessage::info("No files selected."));
    }
    result
}

pub fn download(selection: &FileSelection, number: usize, dest: &Path) -> Result<CmdResult> {
    let written = selection.download(number, dest)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Downloaded {} to {}",
        selection.get(number)?.name,
        written.display()
    )));
    Ok(result)
}
