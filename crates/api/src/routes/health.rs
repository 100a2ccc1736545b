//! `GET /health`: a database round-trip reported as JSON.
//!
//! Load balancers only look at the status line, so an unreachable database
//! turns the whole response into a 503.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use catalog_db::DbPool;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    async fn collect(pool: &DbPool) -> Self {
        let db_healthy = match catalog_db::health_check(pool).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Database health check failed");
                false
            }
        };

        Self {
            status: if db_healthy { "ok" } else { "unavailable" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

impl IntoResponse for HealthReport {
    fn into_response(self) -> Response {
        let status = if self.db_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(self)).into_response()
    }
}

async fn health(State(state): State<AppState>) -> HealthReport {
    HealthReport::collect(&state.pool).await
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
