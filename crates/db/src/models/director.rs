//! Director entity model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `director` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Director {
    pub id: DbId,
    pub name: Option<String>,
}

/// DTO for creating a director. Unknown keys, `id` included, are rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateDirector {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

/// DTO for renaming a director. Keys other than `name` are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDirector {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
