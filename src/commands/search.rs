use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::KeyValueStore;

use super::helpers::all_notes;

/// Case-insensitive substring search over title OR content. An empty or
/// whitespace-only query returns the whole collection. Matches keep storage
/// order; this is a pure read.
pub fn run<S: KeyValueStore>(store: &S, query: &str) -> Result<CmdResult> {
    let notes = all_notes(store)?;
    if query.trim().is_empty() {
        return Ok(CmdResult::default().with_listed_notes(notes));
    }

    let query_lower = query.to_lowercase();
    let matches: Vec<_> = notes
        .into_iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&query_lower)
                || note.content.to_lowercase().contains(&query_lower)
        })
        .collect();

    Ok(CmdResult::default().with_listed_notes(matches))
}
