//! Note handlers — owner CRUD plus the anonymous public surface.

use axum::Json;
use axum::extract::{Path, Query, State};

use notehub_entity::note::model::UpdateNote;

use crate::dto::request::{NoteRequest, PublicListParams, SearchParams, validate_request};
use crate::dto::response::{ApiResponse, NoteResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/notes
///
/// The note's author is always the caller; nothing in the body can set it.
pub async fn create_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<NoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    validate_request(&req)?;

    let note = state
        .note_service
        .create_note(&auth, req.title, req.content, req.public)
        .await?;

    Ok(Json(ApiResponse::ok(NoteResponse::from(note))))
}

/// GET /api/notes
pub async fn list_my_notes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiError> {
    let notes = state.note_service.list_my_notes(&auth).await?;

    Ok(Json(ApiResponse::ok(
        notes.into_iter().map(NoteResponse::from).collect(),
    )))
}

/// GET /api/notes/search?text=…
pub async fn search_my_notes(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiError> {
    let notes = state
        .note_service
        .search_my_notes(&auth, &params.text)
        .await?;

    Ok(Json(ApiResponse::ok(
        notes.into_iter().map(NoteResponse::from).collect(),
    )))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state.note_service.get_note(&auth, id).await?;

    Ok(Json(ApiResponse::ok(NoteResponse::from(note))))
}

/// PUT /api/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(req): Json<NoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    validate_request(&req)?;

    let note = state
        .note_service
        .update_note(
            &auth,
            id,
            UpdateNote {
                title: req.title,
                content: req.content,
                public: req.public,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(NoteResponse::from(note))))
}

/// DELETE /api/notes/{id}
///
/// Returns the deleted note.
pub async fn delete_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state.note_service.delete_note(&auth, id).await?;

    Ok(Json(ApiResponse::ok(NoteResponse::from(note))))
}

/// GET /api/public/notes[?author=…]
pub async fn list_public_notes(
    State(state): State<AppState>,
    Query(params): Query<PublicListParams>,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiError> {
    let notes = state
        .note_service
        .list_public(params.author.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(
        notes.into_iter().map(NoteResponse::from).collect(),
    )))
}

/// GET /api/public/notes/search?text=…[&author=…]
pub async fn search_public_notes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiError> {
    let notes = state
        .note_service
        .search_public(&params.text, params.author.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(
        notes.into_iter().map(NoteResponse::from).collect(),
    )))
}

/// GET /api/public/notes/{id}
pub async fn get_public_note(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state.note_service.get_public_note(id).await?;

    Ok(Json(ApiResponse::ok(NoteResponse::from(note))))
}
