//! NoteStore: the title-keyed snippet table
//!
//! One `notes` table holds (title, body) pairs. `title_key` carries the
//! normalized title under a UNIQUE constraint, so the uniqueness check and the
//! insert happen in a single statement while the connection lock is held.

use super::title::normalize;
use crate::error::{NoteResult, NoteStoreError};
use crate::models::Note;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Result as SqliteResult, Row};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// NoteStore wrapping a single SQLite connection
pub struct NoteStore {
    conn: Mutex<Connection>,
}

impl NoteStore {
    /// Open (or create) the note database at `db_path` and ensure the schema exists.
    /// `:memory:` opens a private in-memory database.
    pub fn open(db_path: &str) -> NoteResult<Self> {
        let conn = if db_path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        NoteStoreError::StorageUnavailable(format!(
                            "Failed to create database directory {:?}: {}",
                            parent, e
                        ))
                    })?;
                }
            }
            let conn = Connection::open(db_path)?;
            conn.execute_batch("PRAGMA journal_mode=WAL;")?;
            conn
        };
        conn.busy_timeout(Duration::from_secs(5))?;

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.create_tables()?;

        Ok(store)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> NoteResult<Self> {
        Self::open(":memory:")
    }

    /// Drop the notes table so every later query fails like a lost database
    #[cfg(test)]
    pub fn break_storage(&self) {
        let conn = self.conn.lock().expect("connection lock poisoned");
        conn.execute_batch("DROP TABLE notes;").expect("Failed to drop notes table");
    }

    fn create_tables(&self) -> NoteResult<()> {
        let conn = self.conn.lock()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                title_key TEXT NOT NULL UNIQUE,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Save a new note. Fails with `DuplicateTitle` if the normalized title is
    /// taken; the existing note is left as it was.
    pub fn create(&self, title: &str, body: &str) -> NoteResult<Note> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() {
            return Err(NoteStoreError::InvalidInput("title must not be empty".to_string()));
        }
        if body.is_empty() {
            return Err(NoteStoreError::InvalidInput("message must not be empty".to_string()));
        }

        let key = normalize(title);
        let now = Utc::now();

        let conn = self.conn.lock()?;
        let inserted = conn.execute(
            "INSERT INTO notes (title, title_key, body, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![title, key, body, now.to_rfc3339()],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                log::info!("[NOTES] Rejected duplicate title \"{}\"", title);
                return Err(NoteStoreError::DuplicateTitle(title.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        let id = conn.last_insert_rowid();
        log::info!("[NOTES] Saved note {} under title \"{}\"", id, title);

        Ok(Note {
            id,
            title: title.to_string(),
            body: body.to_string(),
            created_at: now,
        })
    }

    /// Look up a note by exact case-insensitive title
    pub fn get(&self, title: &str) -> NoteResult<Note> {
        let key = normalize(title);
        let conn = self.conn.lock()?;

        let note = conn
            .query_row(
                "SELECT id, title, body, created_at FROM notes WHERE title_key = ?1",
                params![key],
                row_to_note,
            )
            .optional()?;

        note.ok_or_else(|| {
            log::debug!("[NOTES] No note under title \"{}\"", title.trim());
            NoteStoreError::NotFound(title.trim().to_string())
        })
    }

    /// Delete a note by exact case-insensitive title, returning the number of
    /// rows removed. Zero rows is reported as `NotFound`.
    pub fn delete(&self, title: &str) -> NoteResult<usize> {
        let key = normalize(title);
        let conn = self.conn.lock()?;

        let affected = conn.execute("DELETE FROM notes WHERE title_key = ?1", params![key])?;
        if affected == 0 {
            log::debug!("[NOTES] Nothing to delete under title \"{}\"", title.trim());
            return Err(NoteStoreError::NotFound(title.trim().to_string()));
        }

        log::info!("[NOTES] Deleted note under title \"{}\"", title.trim());
        Ok(affected)
    }

    /// Case-insensitive infix search over titles, capped at `limit` results.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> NoteResult<Vec<Note>> {
        let needle = normalize(query);
        if needle.is_empty() || limit == 0 {
            return Ok(vec![]);
        }

        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, body, created_at
             FROM notes
             WHERE instr(title_key, ?1) > 0
             ORDER BY title_key
             LIMIT ?2",
        )?;

        let notes = stmt
            .query_map(params![needle, limit as i64], row_to_note)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(notes)
    }

    /// Number of notes on record
    pub fn count(&self) -> NoteResult<usize> {
        let conn = self.conn.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Flush the write-ahead log into the main database file. Called on shutdown.
    pub fn checkpoint(&self) -> NoteResult<()> {
        let conn = self.conn.lock()?;
        conn.query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))?;
        Ok(())
    }
}

fn row_to_note(row: &Row<'_>) -> SqliteResult<Note> {
    let created_at_str: String = row.get(3)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        created_at,
    })
}
