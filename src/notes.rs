use chrono::naive::NaiveDateTime;
use uuid::Uuid;

/// A single persisted note
///
/// `updated_at` starts out equal to `created_at` and is refreshed on every
/// successful update; `id` and `created_at` never change after creation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
