//! Route definitions for the `/genre` resource (singular path).

use axum::routing::get;
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genre", get(genre::list).post(genre::create))
        .route(
            "/genre/{id}",
            get(genre::get_by_id)
                .put(genre::update)
                .delete(genre::delete),
        )
}
