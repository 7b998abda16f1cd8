//! Inline query results: title search rendered as selectable articles

use super::util::{self, MAX_MESSAGE_LENGTH};
use crate::error::NoteResult;
use crate::models::Note;
use crate::notes::NoteStore;
use uuid::Uuid;

/// One selectable inline result. `title` is what the user sees in the result
/// list; `message_text` is what gets posted when it is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineArticle {
    pub id: String,
    pub title: String,
    pub message_text: String,
}

impl From<Note> for InlineArticle {
    fn from(note: Note) -> Self {
        Self {
            // Unique per answer; Telegram does not need these to be stable
            id: Uuid::new_v4().to_string(),
            // Posted as a normal message, so it obeys the same length limit
            message_text: util::truncate_utf16(&note.display_line(), MAX_MESSAGE_LENGTH),
            title: note.title,
        }
    }
}

/// Search note titles for an inline query
pub fn search_articles(
    store: &NoteStore,
    query: &str,
    limit: usize,
) -> NoteResult<Vec<InlineArticle>> {
    let notes = store.search(query, limit)?;
    log::debug!(
        "[TELEGRAM] Inline query \"{}\" matched {} notes",
        query.trim(),
        notes.len()
    );
    Ok(notes.into_iter().map(InlineArticle::from).collect())
}
