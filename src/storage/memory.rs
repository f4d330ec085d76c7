//! Memory storage
//!
//! Will be destroyed on system shutdown

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::notes::Note;

use super::parse_note_id;
use super::CreateNoteValues;
use super::Result;
use super::Storage;
use super::UpdateNoteValues;

/// An in-memory storage
///
/// Notes are kept in creation order, so the newest-first listing holds even
/// when two notes share a timestamp
#[derive(Clone, Debug)]
pub struct Memory {
    /// All notes in storage, oldest first
    notes: Arc<Mutex<Vec<Note>>>,
}

impl Memory {
    /// Create a new empty Memory storage
    pub fn new() -> Self {
        Self {
            notes: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl Storage for Memory {
    async fn find_all_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.lock().await.iter().rev().cloned().collect())
    }

    async fn find_single_note(&self, id: &str) -> Result<Option<Note>> {
        let id = parse_note_id(id)?;

        Ok(self
            .notes
            .lock()
            .await
            .iter()
            .find(|note| note.id == id)
            .cloned())
    }

    async fn create_note(&self, values: &CreateNoteValues) -> Result<Note> {
        let now = Utc::now().naive_utc();

        let note = Note {
            id: Uuid::new_v4(),
            title: values.title.to_string(),
            content: values.content.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.notes.lock().await.push(note.clone());

        Ok(note)
    }

    async fn update_note(&self, id: &str, values: &UpdateNoteValues) -> Result<Option<Note>> {
        let id = parse_note_id(id)?;

        Ok(self
            .notes
            .lock()
            .await
            .iter_mut()
            .find(|note| note.id == id)
            .map(|note| {
                note.title = values.title.to_string();
                note.content = values.content.to_string();
                note.updated_at = Utc::now().naive_utc();

                note.clone()
            }))
    }

    async fn delete_note(&self, id: &str) -> Result<bool> {
        let id = parse_note_id(id)?;

        let mut notes = self.notes.lock().await;

        match notes.iter().position(|note| note.id == id) {
            Some(index) => {
                notes.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_find() {
        let storage = Memory::new();

        let values = CreateNoteValues {
            title: "Groceries",
            content: "Milk, eggs",
        };

        let note = storage.create_note(&values).await.unwrap();
        assert_eq!(note.created_at, note.updated_at);

        let found = storage
            .find_single_note(&note.id.to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.title, "Groceries");
        assert_eq!(found.content, "Milk, eggs");
    }

    #[tokio::test]
    async fn test_find_all_is_newest_first() {
        let storage = Memory::new();

        for title in ["a", "b", "c"] {
            let values = CreateNoteValues {
                title,
                content: "content",
            };
            storage.create_note(&values).await.unwrap();
        }

        let notes = storage.find_all_notes().await.unwrap();
        let titles = notes.iter().map(|note| note.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_delete_is_permanent() {
        let storage = Memory::new();

        let values = CreateNoteValues {
            title: "title",
            content: "content",
        };
        let note = storage.create_note(&values).await.unwrap();
        let id = note.id.to_string();

        assert!(storage.delete_note(&id).await.unwrap());
        assert!(storage.find_single_note(&id).await.unwrap().is_none());

        // a second delete observes the absence
        assert!(!storage.delete_note(&id).await.unwrap());
    }
}
