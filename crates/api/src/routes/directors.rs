//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// Director routes.
///
/// ```text
/// GET    /directors        -> list
/// POST   /directors        -> create
/// GET    /directors/{id}   -> get_by_id
/// PUT    /directors/{id}   -> update
/// DELETE /directors/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/directors", get(director::list).post(director::create))
        .route(
            "/directors/{id}",
            get(director::get_by_id)
                .put(director::update)
                .delete(director::delete),
        )
}
