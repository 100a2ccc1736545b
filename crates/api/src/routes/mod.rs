pub mod directors;
pub mod genres;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Paths are mounted at the root, with no version prefix:
///
/// ```text
/// /movies/, /movies          list (?director_id=&genre_id=)
/// /movies/{id}               get
///
/// /directors                 list, create
/// /directors/{id}            get, update, delete
///
/// /genre                     list, create
/// /genre/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(directors::router())
        .merge(genres::router())
}
