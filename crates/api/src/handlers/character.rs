//! Handlers for the `/characters` resource.
//!
//! Each handler runs against a connection checked out of the pool for the
//! duration of the request. Update runs its read-modify-write inside one
//! transaction (see [`CharacterRepo::update`]).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use lore_core::character::{is_known_status, ENTITY_NAME};
use lore_core::error::CoreError;
use lore_core::types::DbId;
use lore_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use lore_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::query::ListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    })
}

/// Turn a unique violation on `name` into a domain conflict.
fn name_conflict(err: sqlx::Error, name: Option<&str>) -> AppError {
    match name {
        Some(name) if lore_db::is_unique_violation(&err) => AppError::Core(CoreError::Conflict(
            format!("{ENTITY_NAME} with name '{name}' already exists"),
        )),
        _ => AppError::Database(err),
    }
}

fn note_unconventional_status(status: Option<&str>) {
    if let Some(status) = status.filter(|s| !is_known_status(s)) {
        tracing::debug!(status, "Character status outside the conventional set");
    }
}

/// POST /characters/
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    note_unconventional_status(input.status.as_deref());

    let character = CharacterRepo::create(&state.pool, &input)
        .await
        .map_err(|e| name_conflict(e, Some(input.name.as_str())))?;

    tracing::info!(
        character_id = character.id,
        name = %character.name,
        "Character created",
    );

    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /characters/?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool, params.offset(), params.limit()).await?;
    Ok(Json(characters))
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(character))
}

/// PUT /characters/{id}
///
/// Applies only the fields present in the body; see [`UpdateCharacter`].
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    note_unconventional_status(input.status.as_deref());

    let character = CharacterRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| name_conflict(e, input.name.as_deref()))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        character_id = character.id,
        name = %character.name,
        "Character updated",
    );

    Ok(Json(character))
}

/// DELETE /characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !CharacterRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(character_id = id, "Character deleted");

    Ok(Json(MessageResponse {
        message: "Character deleted successfully",
    }))
}
