use crate::commands::CmdResult;
use crate::error::{JotzError, Result};
use crate::store::KeyValueStore;
use uuid::Uuid;

use super::helpers::note_by_id;

pub fn run<S: KeyValueStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let note = note_by_id(store, id)?.ok_or(JotzError::NoteNotFound(*id))?;
    Ok(CmdResult::default().with_listed_notes(vec![note]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, login};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_a_note_by_id() {
        let mut store = InMemoryStore::new();
        login::run(&mut store, "alice").unwrap();
        let created = create::run(&mut store, "Title", "Body").unwrap().affected_notes[0].clone();

        let result = run(&store, &created.id).unwrap();
        assert_eq!(result.listed_notes[0], created);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = InMemoryStore::new();
        login::run(&mut store, "alice").unwrap();
        assert!(matches!(
            run(&store, &Uuid::new_v4()),
            Err(JotzError::NoteNotFound(_))
        ));
    }

    #[test]
    fn logged_out_lookup_is_not_found_rather_than_a_failure() {
        let store = InMemoryStore::new();
        assert!(matches!(
            run(&store, &Uuid::new_v4()),
            Err(JotzError::NoteNotFound(_))
        ));
    }
}
