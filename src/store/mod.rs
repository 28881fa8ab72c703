//! # Storage Layer
//!
//! This module defines the storage abstraction for jotz. The [`KeyValueStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. The whole namespace
//!   lives in a single `data.json` under the data directory.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. No persistence.
//!
//! ## Namespace
//!
//! The store is one flat string-to-string namespace. Three kinds of keys
//! exist:
//!
//! ```text
//! active_user        # plain trimmed username
//! all_users          # JSON array of strings (the roster)
//! notes_<username>   # JSON array of note objects for that user
//! ```
//!
//! Every value is read, mutated in memory, and rewritten whole. This is not
//! transactional: two processes sharing one data directory race as
//! last-writer-wins. Accepted limitation for a single-user local tool.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key under which the active username is persisted.
pub const ACTIVE_USER_KEY: &str = "active_user";

/// Key under which the roster of every username ever activated is persisted.
pub const ALL_USERS_KEY: &str = "all_users";

/// Derive the key holding a given user's note collection.
pub fn notes_key_for_user(username: &str) -> String {
    format!("notes_{}", username)
}

/// Abstract interface for the flat key-value namespace.
///
/// Implementations must treat values as opaque strings; interpretation
/// (plain string vs. embedded JSON) belongs to the callers.
pub trait KeyValueStore {
    /// Get the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set `key` to `value`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}
