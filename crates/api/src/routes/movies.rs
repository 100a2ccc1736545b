//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Movie routes.
///
/// ```text
/// GET /movies/       -> list
/// GET /movies        -> list
/// GET /movies/{id}   -> get_by_id
/// ```
///
/// The list is served on both the slash and no-slash forms; clients of the
/// catalog historically call `/movies/`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies/", get(movie::list))
        .route("/movies", get(movie::list))
        .route("/movies/{id}", get(movie::get_by_id))
}
