use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JotzError, Result};
use crate::store::KeyValueStore;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::helpers::{load_notes, require_active_user};

/// Write the active user's collection to `<username>_notes.json` under
/// `dir`, pretty-printed. An empty collection produces a notice and no file.
pub fn run<S: KeyValueStore>(store: &S, dir: &Path) -> Result<CmdResult> {
    let user = require_active_user(store)?;
    let notes = load_notes(store, &user)?;

    if notes.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No notes to export."));
        return Ok(res);
    }

    let filename = format!("{}_notes.json", sanitize_filename(&user));
    let path = dir.join(filename);
    let json = serde_json::to_string_pretty(&notes).map_err(JotzError::Serialization)?;
    let mut file = File::create(&path).map_err(JotzError::Io)?;
    file.write_all(json.as_bytes()).map_err(JotzError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} notes to {}",
        notes.len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
