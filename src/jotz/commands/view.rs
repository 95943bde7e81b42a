use crate::commands::CmdResult;
use crate::store::NoteStore;
use crate::view::Frame;

pub fn run(store: &NoteStore) -> CmdResult {
    CmdResult::default().with_frame(Frame::build(store))
}
