//! Session state: which user is active, and the roster of every user ever
//! activated.
//!
//! There is no authentication here. An identity is a non-empty trimmed
//! string, nothing more; two logins with the same string are the same user.
//! The active user is one persisted key, absence of which means "logged out".
//! The roster is append-only, order of first appearance, deduplicated by
//! exact string match, and is never touched by logout.

use crate::error::{JotzError, Result};
use crate::store::{KeyValueStore, ACTIVE_USER_KEY, ALL_USERS_KEY};

/// Persist `name` (trimmed) as the active user and add it to the roster if
/// it is not already there. Errors if the trimmed name is empty.
pub fn set_active_user<S: KeyValueStore>(store: &mut S, name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(JotzError::EmptyUsername);
    }

    store.set(ACTIVE_USER_KEY, trimmed)?;

    let mut users = all_users(store)?;
    if !users.iter().any(|u| u == trimmed) {
        users.push(trimmed.to_string());
        let encoded = serde_json::to_string(&users).map_err(JotzError::Serialization)?;
        store.set(ALL_USERS_KEY, &encoded)?;
    }

    Ok(trimmed.to_string())
}

/// The active username, or `None` when logged out.
pub fn active_user<S: KeyValueStore>(store: &S) -> Result<Option<String>> {
    store.get(ACTIVE_USER_KEY)
}

/// Remove the active-user record. The roster is left intact.
pub fn clear_active_user<S: KeyValueStore>(store: &mut S) -> Result<()> {
    store.remove(ACTIVE_USER_KEY)
}

/// Every username ever activated, in order of first appearance.
pub fn all_users<S: KeyValueStore>(store: &S) -> Result<Vec<String>> {
    match store.get(ALL_USERS_KEY)? {
        Some(raw) => {
            let users: Vec<String> =
                serde_json::from_str(&raw).map_err(JotzError::Serialization)?;
            Ok(users)
        }
        None => Ok(Vec::new()),
    }
}

pub fn is_logged_in<S: KeyValueStore>(store: &S) -> Result<bool> {
    Ok(active_user(store)?.is_some())
}
