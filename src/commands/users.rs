use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(store: &S) -> Result<CmdResult> {
    let users = session::all_users(store)?;

    let mut result = CmdResult::default();
    if users.is_empty() {
        result.add_message(CmdMessage::info("No users yet."));
    }
    Ok(result.with_users(users))
}
