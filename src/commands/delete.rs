use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotzError, Result};
use crate::store::KeyValueStore;
use uuid::Uuid;

use super::helpers::{load_notes, require_active_user, save_notes};

/// Remove a note from the active user's collection. No tombstone, no
/// soft-delete; the remainder is persisted as-is.
pub fn run<S: KeyValueStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let user = require_active_user(store)?;

    let notes = load_notes(store, &user)?;
    let before = notes.len();
    let (removed, remaining): (Vec<_>, Vec<_>) = notes.into_iter().partition(|note| &note.id == id);

    if remaining.len() == before {
        return Err(JotzError::NoteNotFound(*id));
    }

    save_notes(store, &user, &remaining)?;

    let mut result = CmdResult::default();
    for note in &removed {
        result.add_message(CmdMessage::success(format!("Note deleted: {}", note.title)));
    }
    Ok(result.with_affected_notes(removed))
}
