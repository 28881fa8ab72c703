use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match session::active_user(store)? {
        Some(user) => {
            session::clear_active_user(store)?;
            result.add_message(CmdMessage::success(format!("Logged out {}", user)));
        }
        None => {
            result.add_message(CmdMessage::info("No active user."));
        }
    }

    Ok(result)
}
