//! Bulk import of catalog data from a JSON fixture document.
//!
//! Movies have no HTTP creation endpoint, so an empty catalog is populated
//! from a file shaped like:
//!
//! ```json
//! {
//!   "directors": [{ "id": 1, "name": "Тейлор Шеридан" }],
//!   "genres":    [{ "id": 4, "name": "Драма" }],
//!   "movies":    [{ "id": 1, "title": "Йеллоустоун", "year": 2018,
//!                   "rating": 8.6, "genre_id": 4, "director_id": 1 }]
//! }
//! ```
//!
//! Ids in the document are preserved so the movie foreign keys line up.

use serde::Deserialize;
use sqlx::SqlitePool;

use crate::models::director::Director;
use crate::models::genre::Genre;
use crate::models::movie::CreateMovie;

/// Parsed fixture document. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixtures {
    #[serde(default)]
    pub directors: Vec<Director>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub movies: Vec<CreateMovie>,
}

/// Number of rows written per table by [`load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureCounts {
    pub directors: usize,
    pub genres: usize,
    pub movies: usize,
}

impl Fixtures {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Returns `true` when none of the catalog tables hold any row.
pub async fn catalog_is_empty(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let (total,): (i64,) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM director)
              + (SELECT COUNT(*) FROM genre)
              + (SELECT COUNT(*) FROM movie)",
    )
    .fetch_one(pool)
    .await?;
    Ok(total == 0)
}

/// Insert every fixture row in a single transaction.
///
/// Either the whole document is stored or nothing is.
pub async fn load(pool: &SqlitePool, fixtures: &Fixtures) -> Result<FixtureCounts, sqlx::Error> {
    let mut tx = pool.begin().await?;

    for director in &fixtures.directors {
        sqlx::query("INSERT INTO director (id, name) VALUES (?1, ?2)")
            .bind(director.id)
            .bind(&director.name)
            .execute(&mut *tx)
            .await?;
    }

    for genre in &fixtures.genres {
        sqlx::query("INSERT INTO genre (id, name) VALUES (?1, ?2)")
            .bind(genre.id)
            .bind(&genre.name)
            .execute(&mut *tx)
            .await?;
    }

    for movie in &fixtures.movies {
        sqlx::query(
            "INSERT INTO movie (id, title, description, trailer, year, rating, genre_id, director_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(movie.id)
        .bind(&movie.title)
        .bind(&movie.description)
        .bind(&movie.trailer)
        .bind(movie.year)
        .bind(movie.rating)
        .bind(movie.genre_id)
        .bind(movie.director_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let counts = FixtureCounts {
        directors: fixtures.directors.len(),
        genres: fixtures.genres.len(),
        movies: fixtures.movies.len(),
    };
    tracing::info!(
        directors = counts.directors,
        genres = counts.genres,
        movies = counts.movies,
        "Fixtures loaded",
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_document() {
        let fixtures = Fixtures::from_json(r#"{"genres": [{"id": 2, "name": "Комедия"}]}"#).unwrap();
        assert!(fixtures.directors.is_empty());
        assert!(fixtures.movies.is_empty());
        assert_eq!(fixtures.genres[0].id, 2);
        assert_eq!(fixtures.genres[0].name.as_deref(), Some("Комедия"));
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(Fixtures::from_json(r#"{"actors": []}"#).is_err());
    }

    #[test]
    fn rejects_unknown_movie_keys() {
        let json = r#"{"movies": [{"id": 1, "title": "X", "budget": 10}]}"#;
        assert!(Fixtures::from_json(json).is_err());
    }
}
