//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all jotz operations, regardless of the UI
//! being used.
//!
//! The facade dispatches to the appropriate command function and returns
//! structured types (`Result<CmdResult>`). It holds no business logic,
//! performs no I/O, and never formats anything for a terminal — that is the
//! CLI's job.
//!
//! `JotzApi<S: KeyValueStore>` is generic over the storage backend:
//! production runs on `FileStore`, tests on `InMemoryStore`.

use crate::commands;
use crate::error::Result;
use crate::store::KeyValueStore;
use std::path::Path;
use uuid::Uuid;

/// The main API facade for jotz operations.
///
/// Generic over `KeyValueStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct JotzApi<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> JotzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn login(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::login::run(&mut self.store, name)
    }

    pub fn logout(&mut self) -> Result<commands::CmdResult> {
        commands::logout::run(&mut self.store)
    }

    pub fn whoami(&self) -> Result<commands::CmdResult> {
        commands::whoami::run(&self.store)
    }

    pub fn users(&self) -> Result<commands::CmdResult> {
        commands::users::run(&self.store)
    }

    pub fn create_note(&mut self, title: &str, content: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_note(&self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn update_note(
        &mut self,
        id: &Uuid,
        title: &str,
        content: &str,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, title, content)
    }

    pub fn delete_note(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn search_notes(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn export_notes(&self, dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, dir)
    }

    pub fn import_notes(&mut self, notes: Vec<crate::model::Note>) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, notes)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
