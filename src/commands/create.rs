use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotzError, Result};
use crate::model::Note;
use crate::store::KeyValueStore;

use super::helpers::{load_notes, require_active_user, save_notes};

pub fn run<S: KeyValueStore>(store: &mut S, title: &str, content: &str) -> Result<CmdResult> {
    let user = require_active_user(store)?;

    let title = title.trim();
    if title.is_empty() {
        return Err(JotzError::EmptyTitle);
    }

    let note = Note::new(title.to_string(), content.to_string());
    let mut notes = load_notes(store, &user)?;
    notes.push(note.clone());
    save_notes(store, &user, &notes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note created: {}", note.title)));
    Ok(result.with_affected_notes(vec![note]))
}
