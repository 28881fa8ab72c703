use crate::error::{JotzError, Result};
use crate::model::Note;
use crate::session;
use crate::store::{notes_key_for_user, KeyValueStore};
use uuid::Uuid;

/// The active username, or `NoActiveUser` for operations that require one.
pub fn require_active_user<S: KeyValueStore>(store: &S) -> Result<String> {
    session::active_user(store)?.ok_or(JotzError::NoActiveUser)
}

/// A user's note collection, in storage (insertion) order.
pub fn load_notes<S: KeyValueStore>(store: &S, username: &str) -> Result<Vec<Note>> {
    match store.get(&notes_key_for_user(username))? {
        Some(raw) => {
            let notes: Vec<Note> = serde_json::from_str(&raw).map_err(JotzError::Serialization)?;
            Ok(notes)
        }
        None => Ok(Vec::new()),
    }
}

/// Rewrite a user's collection whole. Not transactional; callers hold the
/// only snapshot there is.
pub fn save_notes<S: KeyValueStore>(store: &mut S, username: &str, notes: &[Note]) -> Result<()> {
    let encoded = serde_json::to_string(notes).map_err(JotzError::Serialization)?;
    store.set(&notes_key_for_user(username), &encoded)
}

/// The active user's collection; empty when logged out or never written.
pub fn all_notes<S: KeyValueStore>(store: &S) -> Result<Vec<Note>> {
    match session::active_user(store)? {
        Some(user) => load_notes(store, &user),
        None => Ok(Vec::new()),
    }
}

/// Linear scan of the active user's collection. Yields `None` both for an
/// unknown id and when nobody is logged in.
pub fn note_by_id<S: KeyValueStore>(store: &S, id: &Uuid) -> Result<Option<Note>> {
    let notes = all_notes(store)?;
    Ok(notes.into_iter().find(|note| &note.id == id))
}
