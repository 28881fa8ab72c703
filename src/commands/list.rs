use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::KeyValueStore;

use super::helpers::all_notes;

/// List the active user's notes in storage order. Logged out or an empty
/// collection both yield an empty list, never an error. Sorting by recency
/// is left to the presentation side.
pub fn run<S: KeyValueStore>(store: &S) -> Result<CmdResult> {
    let notes = all_notes(store)?;
    Ok(CmdResult::default().with_listed_notes(notes))
}
