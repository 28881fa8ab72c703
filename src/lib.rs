//! # Jotz Architecture
//!
//! Jotz is a **UI-agnostic note-taking library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! │  - Confirmation prompts for destructive operations live here│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, session.rs)                  │
//! │  - Pure business logic: CRUD, search, import/export merge   │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - Executes unconditionally when called; no prompting       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sessions
//!
//! There is exactly one active user at a time, identified by a freeform
//! trimmed name. Note collections are namespaced per user inside one flat
//! key-value namespace; login and logout only flip the `active_user` entry.
//! No ambient globals: all session state flows through the store handle.
//!
//! ## Persistence model
//!
//! Every store value is read, mutated in memory, and rewritten whole. Two
//! processes sharing a data directory are last-writer-wins — there is no
//! locking and no version check. Accepted for a single-user local tool.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`session`]: Active user and roster handling
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The core data type ([`model::Note`])
//! - [`markdown`]: Markdown-to-safe-HTML rendering
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod markdown;
pub mod model;
pub mod session;
pub mod store;
