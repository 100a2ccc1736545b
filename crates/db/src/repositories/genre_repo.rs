//! Repository for the `genre` table.

use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::genre::{CreateGenre, Genre};

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genre (name) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre WHERE id = ?1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Overwrite a genre's name. Returns `None` if the genre does not exist.
    pub async fn update_name(
        pool: &SqlitePool,
        id: DbId,
        name: &str,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("UPDATE genre SET name = ?2 WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genre WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
