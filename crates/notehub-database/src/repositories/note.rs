//! Note repository implementation.
//!
//! Every operation here is a single independent unit of work against the
//! pool; none of them performs authorization. Point lookups return
//! `Option` so callers can distinguish "no such note" from a failure.
//! `public` is a reserved word in PostgreSQL and is quoted in every query.

use sqlx::PgPool;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::note::model::{CreateNote, UpdateNote};
use notehub_entity::note::Note;

/// Repository for note CRUD, listing, and substring search operations.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new note. The server assigns the id and timestamps.
    pub async fn create(&self, data: &CreateNote) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            r#"INSERT INTO notes (title, content, "public", author)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.public)
        .bind(&data.author)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("notes_author_fkey") =>
            {
                AppError::validation(format!("Author '{}' does not exist", data.author))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create note", e),
        })
    }

    /// Find a note by primary key.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find note by id", e))
    }

    /// Replace a note's title, content, and visibility, bumping
    /// `modified_at`. Returns `None` when no note with that id exists.
    /// `id` and `author` are immutable.
    pub async fn update(&self, id: i32, data: &UpdateNote) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>(
            r#"UPDATE notes
               SET title = $2, content = $3, "public" = $4, modified_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.public)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update note", e))
    }

    /// Delete a note and return the prior record, or `None` if not found.
    pub async fn remove(&self, id: i32) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("DELETE FROM notes WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete note", e))
    }

    /// List all notes (public and private) owned by one author.
    pub async fn find_by_author(&self, author: &str) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE author = $1 ORDER BY created_at DESC")
            .bind(author)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list notes by author", e)
            })
    }

    /// List all public notes, any author.
    pub async fn find_public(&self) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            r#"SELECT * FROM notes WHERE "public" = TRUE ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list public notes", e))
    }

    /// List one author's public notes.
    pub async fn find_public_by_author(&self, author: &str) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            r#"SELECT * FROM notes WHERE "public" = TRUE AND author = $1
               ORDER BY created_at DESC"#,
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list public notes by author",
                e,
            )
        })
    }

    /// Search public notes whose title or content contains `text`.
    pub async fn search_public(&self, text: &str) -> AppResult<Vec<Note>> {
        let pattern = format!("%{text}%");

        sqlx::query_as::<_, Note>(
            r#"SELECT * FROM notes
               WHERE "public" = TRUE AND (title ILIKE $1 OR content ILIKE $1)
               ORDER BY created_at DESC"#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search public notes", e))
    }

    /// Search one author's public notes.
    pub async fn search_public_by_author(&self, text: &str, author: &str) -> AppResult<Vec<Note>> {
        let pattern = format!("%{text}%");

        sqlx::query_as::<_, Note>(
            r#"SELECT * FROM notes
               WHERE "public" = TRUE AND author = $2
                 AND (title ILIKE $1 OR content ILIKE $1)
               ORDER BY created_at DESC"#,
        )
        .bind(&pattern)
        .bind(author)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to search public notes by author",
                e,
            )
        })
    }

    /// Search all of one author's notes, public and private.
    pub async fn search_by_author(&self, text: &str, author: &str) -> AppResult<Vec<Note>> {
        let pattern = format!("%{text}%");

        sqlx::query_as::<_, Note>(
            r#"SELECT * FROM notes
               WHERE author = $2 AND (title ILIKE $1 OR content ILIKE $1)
               ORDER BY created_at DESC"#,
        )
        .bind(&pattern)
        .bind(author)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to search notes by author", e)
        })
    }
}
