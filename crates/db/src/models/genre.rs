//! Genre entity model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `genre` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Genre {
    pub id: DbId,
    pub name: Option<String>,
}

/// DTO for `POST /genre`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateGenre {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

/// DTO for `PUT /genre/{id}`. Only `name` is read from the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGenre {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
