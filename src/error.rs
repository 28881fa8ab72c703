use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum JotzError {
    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("No active user. Log in first")]
    NoActiveUser,

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JotzError>;
