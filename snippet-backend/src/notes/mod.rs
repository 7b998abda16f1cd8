//! Notes system: title-keyed snippets in a single SQLite table
//!
//! Titles are unique case-insensitively. The store owns the connection and
//! serializes every operation behind one lock.

pub mod store;
pub mod title;

pub use store::NoteStore;
