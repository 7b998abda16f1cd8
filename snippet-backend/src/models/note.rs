use chrono::{DateTime, Utc};
use serde::Serialize;

/// A saved snippet. Identity is the normalized title; `title` keeps the
/// casing it was saved with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// The "title: body" line shown when a note is retrieved or shared inline
    pub fn display_line(&self) -> String {
        format!("Message under title \"{}\": {}", self.title, self.body)
    }
}
