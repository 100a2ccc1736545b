//! Handlers for the read-only `/movies` resource.

use axum::extract::State;
use axum::Json;
use catalog_core::entity::{EntityKind, NO_MOVIES_FOUND};
use catalog_core::error::CoreError;
use catalog_core::filter::MovieFilter;
use catalog_db::models::movie::Movie;
use catalog_db::repositories::MovieRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, QueryParams};
use crate::state::AppState;

/// Raw `?director_id=&genre_id=` values. Blank values count as absent.
#[derive(Debug, Deserialize)]
pub struct MovieListParams {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

/// Body of `GET /movies/`.
///
/// An empty result is reported as a localized sentence, not `[]`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MovieList {
    Movies(Vec<Movie>),
    Empty(&'static str),
}

impl From<Vec<Movie>> for MovieList {
    fn from(movies: Vec<Movie>) -> Self {
        if movies.is_empty() {
            MovieList::Empty(NO_MOVIES_FOUND)
        } else {
            MovieList::Movies(movies)
        }
    }
}

/// GET /movies/
pub async fn list(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<MovieListParams>,
) -> AppResult<Json<MovieList>> {
    let filter = MovieFilter::parse(params.director_id.as_deref(), params.genre_id.as_deref())?;
    tracing::debug!(
        director_id = ?filter.director_id,
        genre_id = ?filter.genre_id,
        "Listing movies",
    );

    let movies = MovieRepo::list(&state.pool, &filter).await?;
    Ok(Json(MovieList::from(movies)))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: EntityKind::Movie,
            id,
        }))?;
    Ok(Json(movie))
}
