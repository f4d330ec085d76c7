//! All things related to the storage of notes

use async_trait::async_trait;
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::notes::Note;

#[cfg(not(feature = "postgres"))]
use memory::Memory;
#[cfg(feature = "postgres")]
use postgres::Postgres;

pub(crate) mod memory;
#[cfg(feature = "postgres")]
mod postgres;

/// Setup the storage
#[cfg(not(feature = "postgres"))]
#[allow(clippy::unused_async)]
pub async fn setup() -> Result<Memory> {
    Ok(Memory::new())
}

/// Setup the storage
///
/// Fails when no connection can be made, the server should not start
/// accepting traffic in that case
#[cfg(feature = "postgres")]
pub async fn setup() -> Result<Postgres> {
    Postgres::new().await
}

/// Storage errors
#[derive(Debug, ThisError)]
pub enum Error {
    /// A connection error with the storage
    #[error("Connection error: {0}")]
    Connection(String),

    /// An identifier that is not valid for the store
    #[error("Malformed note identifier: {0}")]
    MalformedId(String),
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Values to create a Note
///
/// Both fields are required and non-empty, enforced before the store is hit
pub struct CreateNoteValues<'a> {
    /// Title of the note
    pub title: &'a str,

    /// Content of the note
    pub content: &'a str,
}

/// Values to update a Note
///
/// An update replaces both fields and refreshes `updated_at`
pub struct UpdateNoteValues<'a> {
    /// New title of the note
    pub title: &'a str,

    /// New content of the note
    pub content: &'a str,
}

/// Storage with all supported operations
#[async_trait]
pub trait Storage: Clone + Send + Sync + 'static {
    /// Find all notes, newest first (`created_at` descending)
    async fn find_all_notes(&self) -> Result<Vec<Note>>;

    /// Find a single note by its ID
    ///
    /// `Ok(None)` when no note has the given ID
    async fn find_single_note(&self, id: &str) -> Result<Option<Note>>;

    /// Create a note with a fresh ID and timestamps
    async fn create_note(&self, values: &CreateNoteValues) -> Result<Note>;

    /// Replace title/content of a note and refresh `updated_at`
    ///
    /// `Ok(None)` when no note has the given ID
    async fn update_note(&self, id: &str, values: &UpdateNoteValues) -> Result<Option<Note>>;

    /// Permanently remove a note
    ///
    /// Returns whether a note was actually removed
    async fn delete_note(&self, id: &str) -> Result<bool>;
}

/// Parse a raw path segment into a note ID
///
/// The store only knows UUIDs, anything else is a malformed identifier
pub fn parse_note_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| Error::MalformedId(id.to_string()))
}
