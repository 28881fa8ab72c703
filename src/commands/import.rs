use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::KeyValueStore;
use std::collections::HashSet;

use super::helpers::{load_notes, require_active_user, save_notes};

/// Merge `incoming` into the active user's collection by id:
/// existing notes whose id appears in the incoming set are dropped and
/// replaced wholesale; the rest are kept; every incoming note is appended.
/// The merged collection is persisted unconditionally.
///
/// Shape validation happens upstream, where the payload is deserialized into
/// typed [`Note`]s; malformed entries never reach this point.
pub fn run<S: KeyValueStore>(store: &mut S, incoming: Vec<Note>) -> Result<CmdResult> {
    let user = require_active_user(store)?;

    let incoming_ids: HashSet<_> = incoming.iter().map(|note| note.id).collect();
    let existing = load_notes(store, &user)?;
    let before = existing.len();

    let mut merged: Vec<Note> = existing
        .into_iter()
        .filter(|note| !incoming_ids.contains(&note.id))
        .collect();
    let replaced = before - merged.len();
    let added = incoming.len() - replaced;
    merged.extend(incoming);

    save_notes(store, &user, &merged)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} notes ({} new, {} replaced)",
        added + replaced,
        added,
        replaced
    )));
    Ok(result.with_listed_notes(merged))
}
