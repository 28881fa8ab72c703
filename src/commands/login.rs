use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = session::set_active_user(store, name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Logged in as {}", name)));
    Ok(result.with_active_user(Some(name)))
}
