use axum::extract::Path;
use axum::Extension;
use axum::Json;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::notes::Note;
use crate::storage;
use crate::storage::CreateNoteValues;
use crate::storage::Storage;
use crate::storage::UpdateNoteValues;

use super::response::Confirmation;
use super::Error;
use super::Success;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NoteResponse {
    fn from_note(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }

    fn from_note_multiple(mut notes: Vec<Note>) -> Vec<Self> {
        notes.drain(..).map(Self::from_note).collect::<Vec<Self>>()
    }
}

/// Title and content of a note, both required and non-empty
///
/// Fields are optional at the serde level so a missing field surfaces as our
/// own 400 instead of a deserialization rejection
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    title: Option<String>,
    content: Option<String>,
}

impl NoteForm {
    /// Reject malformed writes before they reach the store
    fn required_fields(&self) -> Result<(&str, &str), Error> {
        match (self.title.as_deref(), self.content.as_deref()) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Ok((title, content))
            }
            _ => Err(Error::bad_request("Title and content are required")),
        }
    }
}

pub async fn list<S: Storage>(
    Extension(storage): Extension<S>,
) -> Result<Success<Vec<NoteResponse>>, Error> {
    let notes = storage
        .find_all_notes()
        .await
        .map_err(store_error("could not list notes"))?;

    Ok(Success::ok(NoteResponse::from_note_multiple(notes)))
}

pub async fn single<S: Storage>(
    Extension(storage): Extension<S>,
    Path(id): Path<String>,
) -> Result<Success<NoteResponse>, Error> {
    let note = storage
        .find_single_note(&id)
        .await
        .map_err(store_error("could not fetch note"))?;

    note.map_or_else(
        || Err(Error::not_found("Notes not found!")),
        |note| Ok(Success::ok(NoteResponse::from_note(note))),
    )
}

pub async fn create<S: Storage>(
    Extension(storage): Extension<S>,
    Json(form): Json<NoteForm>,
) -> Result<Success<Confirmation>, Error> {
    let (title, content) = form.required_fields()?;

    let values = CreateNoteValues { title, content };

    storage
        .create_note(&values)
        .await
        .map_err(store_error("could not create note"))?;

    Ok(Success::created(Confirmation::new(
        "Note created successfully",
    )))
}

pub async fn update<S: Storage>(
    Extension(storage): Extension<S>,
    Path(id): Path<String>,
    Json(form): Json<NoteForm>,
) -> Result<Success<Confirmation>, Error> {
    let (title, content) = form.required_fields()?;

    let values = UpdateNoteValues { title, content };

    let updated = storage
        .update_note(&id, &values)
        .await
        .map_err(store_error("could not update note"))?;

    updated.map_or_else(
        || Err(Error::not_found("Note not found!")),
        |_| Ok(Success::ok(Confirmation::new("Note updated successfully"))),
    )
}

pub async fn delete<S: Storage>(
    Extension(storage): Extension<S>,
    Path(id): Path<String>,
) -> Result<Success<Confirmation>, Error> {
    let deleted = storage
        .delete_note(&id)
        .await
        .map_err(store_error("could not delete note"))?;

    if deleted {
        Ok(Success::ok(Confirmation::new("Note deleted successfully")))
    } else {
        Err(Error::not_found("Note not found!"))
    }
}

/// Log a storage failure with context and hide the cause behind a 500
fn store_error(context: &'static str) -> impl FnOnce(storage::Error) -> Error {
    move |err| {
        tracing::error!(error = %err, "{context}");

        Error::internal_server_error()
    }
}
