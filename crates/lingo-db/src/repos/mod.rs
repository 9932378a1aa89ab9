//! Repository modules implementing CRUD operations for all Lingo entities.
//!
//! Each module adds methods to `ContentService` via `impl ContentService` blocks.
//! Collections come back in insertion order (row id or association rowid).

pub mod communication;
pub mod context;
pub mod description;
pub mod language;
pub mod prompt;
pub mod situation;
pub mod utterance;
