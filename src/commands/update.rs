use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotzError, Result};
use crate::store::KeyValueStore;
use chrono::Utc;
use uuid::Uuid;

use super::helpers::{load_notes, require_active_user, save_notes};

/// Replace a note's title and content in place. `id` and `created_at` are
/// never touched; `updated_at` is refreshed.
pub fn run<S: KeyValueStore>(
    store: &mut S,
    id: &Uuid,
    title: &str,
    content: &str,
) -> Result<CmdResult> {
    let user = require_active_user(store)?;

    let title = title.trim();
    if title.is_empty() {
        return Err(JotzError::EmptyTitle);
    }

    let mut notes = load_notes(store, &user)?;
    let note = notes
        .iter_mut()
        .find(|note| &note.id == id)
        .ok_or(JotzError::NoteNotFound(*id))?;

    note.title = title.to_string();
    note.content = content.to_string();
    note.updated_at = Utc::now();
    let updated = note.clone();
    save_notes(store, &user, &notes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note updated: {}", updated.title)));
    Ok(result.with_affected_notes(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, login, view};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn replaces_title_and_content() {
        let mut store = InMemoryStore::new();
        login::run(&mut store, "alice").unwrap();
        let created = create::run(&mut store, "Shopping", "milk, eggs").unwrap().affected_notes[0].clone();

        let result = run(&mut store, &created.id, "Groceries", "milk, eggs, bread").unwrap();
        let updated = &result.affected_notes[0];
        assert_eq!(updated.title, "Groceries");
        assert_eq!(updated.content, "milk, eggs, bread");

        let stored = view::run(&store, &created.id).unwrap().listed_notes[0].clone();
        assert_eq!(stored.title, "Groceries");
    }

    #[test]
    fn preserves_id_and_created_at_and_advances_updated_at() {
        let mut store = InMemoryStore::new();
        login::run(&mut store, "alice").unwrap();
        let created = create::run(&mut store, "Title", "Old").unwrap().affected_notes[0].clone();

        let updated = run(&mut store, &created.id, "Title", "New").unwrap().affected_notes[0].clone();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn rejects_empty_title() {
        let mut store = InMemoryStore::new();
        login::run(&mut store, "alice").unwrap();
        let created = create::run(&mut store, "Title", "").unwrap().affected_notes[0].clone();
        assert!(matches!(
            run(&mut store, &created.id, "  ", "body"),
            Err(JotzError::EmptyTitle)
        ));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = InMemoryStore::new();
        login::run(&mut store, "alice").unwrap();
        assert!(matches!(
            run(&mut store, &Uuid::new_v4(), "Title", ""),
            Err(JotzError::NoteNotFound(_))
        ));
    }

    #[test]
    fn rejects_update_when_logged_out() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, &Uuid::new_v4(), "Title", ""),
            Err(JotzError::NoActiveUser)
        ));
    }
}
