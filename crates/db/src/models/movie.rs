//! Movie entity model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movie` table.
///
/// Serializes to the flat projection: scalar columns plus the raw
/// `genre_id` / `director_id`, never the related rows themselves.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// Insert payload for a movie row.
///
/// Movies are not created over HTTP; rows come from fixture files and tests.
/// `id` may be supplied to preserve ids from an existing dataset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}
