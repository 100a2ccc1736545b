//! Repository for the `director` table.

use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::director::{CreateDirector, Director};

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateDirector,
    ) -> Result<Director, sqlx::Error> {
        let query = format!("INSERT INTO director (name) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a director by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director WHERE id = ?1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors in id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director ORDER BY id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Overwrite a director's name.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_name(
        pool: &SqlitePool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("UPDATE director SET name = ?2 WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director by id. Returns `true` if a row was removed.
    ///
    /// Movies referencing the director keep their `director_id`.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM director WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
