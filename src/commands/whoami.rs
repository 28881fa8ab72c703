use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session;
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(store: &S) -> Result<CmdResult> {
    let user = session::active_user(store)?;

    let mut result = CmdResult::default();
    if user.is_none() {
        result.add_message(CmdMessage::info("Not logged in."));
    }
    Ok(result.with_active_user(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::login;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_the_active_user() {
        let mut store = InMemoryStore::new();
        login::run(&mut store, "alice").unwrap();
        assert_eq!(run(&store).unwrap().active_user.as_deref(), Some("alice"));
    }

    #[test]
    fn logged_out_is_a_notice() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert_eq!(result.active_user, None);
        assert_eq!(result.messages.len(), 1);
    }
}
