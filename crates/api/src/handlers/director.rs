//! Handlers for the `/directors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use catalog_core::entity::EditableKind;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::director::{CreateDirector, Director, UpdateDirector};
use catalog_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, ValidatedJson};
use crate::response::Confirmation;
use crate::state::AppState;

const KIND: EditableKind = EditableKind::Director;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: KIND.into(),
        id,
    })
}

/// POST /directors
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDirector>,
) -> AppResult<(StatusCode, Json<Confirmation>)> {
    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, "Director created");

    Ok((
        StatusCode::CREATED,
        Json(Confirmation {
            id: director.id,
            message: KIND.created_message(),
        }),
    ))
}

/// GET /directors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(director))
}

/// PUT /directors/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateDirector>,
) -> AppResult<Json<Confirmation>> {
    let director = DirectorRepo::update_name(&state.pool, id, &input.name)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(director_id = director.id, "Director renamed");

    Ok(Json(Confirmation {
        id: director.id,
        message: KIND.updated_message(),
    }))
}

/// DELETE /directors/{id}
///
/// Movies pointing at the director keep their `director_id`.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Confirmation>> {
    if !DirectorRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(director_id = id, "Director deleted");

    Ok(Json(Confirmation {
        id,
        message: KIND.deleted_message(),
    }))
}
