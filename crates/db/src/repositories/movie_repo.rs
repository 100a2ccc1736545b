//! Repository for the `movie` table.

use catalog_core::filter::MovieFilter;
use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::movie::{CreateMovie, Movie};

/// Column list shared across queries, in projection order.
const COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// Read access to movies, plus the raw insert used by fixtures.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie, returning the stored row.
    ///
    /// When `input.id` is `None` the store assigns the next id.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (id, title, description, trailer, year, rating, genre_id, director_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(input.id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies matching every filter that is set, in id order.
    ///
    /// An unset filter matches all rows, including rows whose column is NULL.
    pub async fn list(pool: &SqlitePool, filter: &MovieFilter) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie
             WHERE (?1 IS NULL OR director_id = ?1)
               AND (?2 IS NULL OR genre_id = ?2)
             ORDER BY id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(filter.director_id)
            .bind(filter.genre_id)
            .fetch_all(pool)
            .await
    }
}
