use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled, timestamped text record owned by exactly one user.
///
/// Serialized with camelCase timestamp keys so the on-disk shape matches the
/// export/import file format: `{id, title, content, createdAt, updatedAt}`.
/// Every field is required when deserializing; a payload missing any of them
/// is rejected at the parse boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    // Set once at creation, never changed afterwards
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}
