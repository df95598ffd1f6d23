//! Note CRUD, listing, and search with the ownership policy applied.
//!
//! Rules enforced here:
//! - a note's `author` is always the caller's username, never request input
//! - only the author may read a private note or update/delete any note
//! - an authenticated caller hitting someone else's private note gets
//!   Forbidden; a missing note is NotFound
//! - the public (anonymous) surface treats private notes as NotFound

use std::sync::Arc;

use tracing::info;

use notehub_core::error::AppError;
use notehub_database::repositories::note::NoteRepository;
use notehub_entity::note::model::{CreateNote, UpdateNote};
use notehub_entity::note::Note;

use crate::context::RequestContext;

/// Handles note operations on behalf of authenticated and anonymous callers.
#[derive(Debug, Clone)]
pub struct NoteService {
    /// Note repository.
    note_repo: Arc<NoteRepository>,
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(note_repo: Arc<NoteRepository>) -> Self {
        Self { note_repo }
    }

    /// Creates a note owned by the caller.
    pub async fn create_note(
        &self,
        ctx: &RequestContext,
        title: String,
        content: String,
        public: bool,
    ) -> Result<Note, AppError> {
        let note = self
            .note_repo
            .create(&CreateNote {
                title,
                content,
                public,
                author: ctx.username.clone(),
            })
            .await?;

        info!(note_id = note.id, author = %note.author, "Note created");

        Ok(note)
    }

    /// Gets a note by id on behalf of an authenticated caller.
    ///
    /// The caller sees their own notes and any public note; someone else's
    /// private note is Forbidden.
    pub async fn get_note(&self, ctx: &RequestContext, id: i32) -> Result<Note, AppError> {
        let note = self
            .note_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))?;

        if !note.public && note.author != ctx.username {
            return Err(AppError::forbidden("You do not have access to this note"));
        }

        Ok(note)
    }

    /// Replaces a note's title, content, and visibility. Author only.
    pub async fn update_note(
        &self,
        ctx: &RequestContext,
        id: i32,
        data: UpdateNote,
    ) -> Result<Note, AppError> {
        let existing = self
            .note_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))?;

        if existing.author != ctx.username {
            return Err(AppError::forbidden("Only the author may update a note"));
        }

        let note = self
            .note_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))?;

        info!(note_id = note.id, author = %note.author, "Note updated");

        Ok(note)
    }

    /// Deletes a note and returns the prior record. Author only.
    pub async fn delete_note(&self, ctx: &RequestContext, id: i32) -> Result<Note, AppError> {
        let existing = self
            .note_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))?;

        if existing.author != ctx.username {
            return Err(AppError::forbidden("Only the author may delete a note"));
        }

        let note = self
            .note_repo
            .remove(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Note {id} not found")))?;

        info!(note_id = note.id, author = %note.author, "Note deleted");

        Ok(note)
    }

    /// Lists all of the caller's notes, public and private.
    pub async fn list_my_notes(&self, ctx: &RequestContext) -> Result<Vec<Note>, AppError> {
        self.note_repo.find_by_author(&ctx.username).await
    }

    /// Searches the caller's notes, public and private.
    pub async fn search_my_notes(
        &self,
        ctx: &RequestContext,
        text: &str,
    ) -> Result<Vec<Note>, AppError> {
        self.note_repo.search_by_author(text, &ctx.username).await
    }

    /// Lists public notes, optionally scoped to one author.
    pub async fn list_public(&self, author: Option<&str>) -> Result<Vec<Note>, AppError> {
        match author {
            Some(author) => self.note_repo.find_public_by_author(author).await,
            None => self.note_repo.find_public().await,
        }
    }

    /// Gets a public note by id for an anonymous caller.
    ///
    /// A private note reads as NotFound here; the anonymous surface does
    /// not admit its existence.
    pub async fn get_public_note(&self, id: i32) -> Result<Note, AppError> {
        let note = self.note_repo.find_by_id(id).await?;

        match note {
            Some(note) if note.public => Ok(note),
            _ => Err(AppError::not_found(format!("Note {id} not found"))),
        }
    }

    /// Searches public notes, optionally scoped to one author.
    pub async fn search_public(
        &self,
        text: &str,
        author: Option<&str>,
    ) -> Result<Vec<Note>, AppError> {
        match author {
            Some(author) => self.note_repo.search_public_by_author(text, author).await,
            None => self.note_repo.search_public(text).await,
        }
    }
}
