//! Handlers for the `/genre` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::entity::EditableKind;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use catalog_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::response::Confirmation;
use crate::state::AppState;

const KIND: EditableKind = EditableKind::Genre;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: KIND.into(),
        id,
    })
}

/// POST /genre
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateGenre>,
) -> AppResult<(StatusCode, Json<Confirmation>)> {
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, "Genre created");

    Ok((
        StatusCode::CREATED,
        Json(Confirmation {
            id: genre.id,
            message: KIND.created_message(),
        }),
    ))
}

/// GET /genre
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /genre/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(genre))
}

/// PUT /genre/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateGenre>,
) -> AppResult<Json<Confirmation>> {
    let genre = GenreRepo::update_name(&state.pool, id, &input.name)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(genre_id = genre.id, "Genre renamed");

    Ok(Json(Confirmation {
        id: genre.id,
        message: KIND.updated_message(),
    }))
}

/// DELETE /genre/{id}
///
/// Movies pointing at the genre keep their `genre_id`.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Confirmation>> {
    if !GenreRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(genre_id = id, "Genre deleted");

    Ok(Json(Confirmation {
        id,
        message: KIND.deleted_message(),
    }))
}
