//! Postgres storage
//!
//! A single `notes` table, no secondary indexes beyond the primary key and
//! the `created_at` sort

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::notes::Note;

use super::parse_note_id;
use super::CreateNoteValues;
use super::Error;
use super::Result;
use super::Storage;
use super::UpdateNoteValues;

/// A Postgres storage
#[derive(Clone)]
pub struct Postgres {
    /// Pool of connections
    connection_pool: PgPool,
}

impl Postgres {
    /// Create a new Postgres storage
    ///
    /// Uses the `DATABASE_URL` environment variable, runs migrations
    pub async fn new() -> Result<Self> {
        let database_connection_string = std::env::var("DATABASE_URL")
            .map_err(|_| Error::Connection("DATABASE_URL is not set".to_string()))?;

        let connection_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_connection_string)
            .await
            .map_err(connection_error)?;

        sqlx::migrate!("./migrations")
            .run(&connection_pool)
            .await
            .map_err(connection_error)?;

        Ok(Self { connection_pool })
    }
}

#[async_trait]
impl Storage for Postgres {
    async fn find_all_notes(&self) -> Result<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            r"
            SELECT id, title, content, created_at, updated_at
            FROM notes
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn find_single_note(&self, id: &str) -> Result<Option<Note>> {
        let id = parse_note_id(id)?;

        sqlx::query_as::<_, Note>(
            r"
            SELECT id, title, content, created_at, updated_at
            FROM notes
            WHERE id = $1
            LIMIT 1
            ",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn create_note(&self, values: &CreateNoteValues) -> Result<Note> {
        sqlx::query_as::<_, Note>(
            r"
            INSERT INTO notes (id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, created_at, updated_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(values.title)
        .bind(values.content)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn update_note(&self, id: &str, values: &UpdateNoteValues) -> Result<Option<Note>> {
        let id = parse_note_id(id)?;

        sqlx::query_as::<_, Note>(
            r"
            UPDATE notes
            SET title = $1, content = $2, updated_at = CURRENT_TIMESTAMP
            WHERE id = $3
            RETURNING id, title, content, created_at, updated_at
            ",
        )
        .bind(values.title)
        .bind(values.content)
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)
    }

    async fn delete_note(&self, id: &str) -> Result<bool> {
        let id = parse_note_id(id)?;

        let result = sqlx::query(
            r"
            DELETE FROM notes
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(result.rows_affected() > 0)
    }
}

/// Convert `SQLx` to storage connection error
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}
