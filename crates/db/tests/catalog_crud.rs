//! Integration tests for the catalog repositories.
//!
//! Each test runs against a fresh SQLite database with the embedded
//! migrations applied.

use catalog_core::filter::MovieFilter;
use catalog_db::models::director::CreateDirector;
use catalog_db::models::genre::CreateGenre;
use catalog_db::models::movie::CreateMovie;
use catalog_db::repositories::{DirectorRepo, GenreRepo, MovieRepo};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str, director_id: Option<i64>, genre_id: Option<i64>) -> CreateMovie {
    CreateMovie {
        title: Some(title.to_string()),
        year: Some(2010),
        rating: Some(7.5),
        director_id,
        genre_id,
        ..Default::default()
    }
}

fn titles(movies: &[catalog_db::models::movie::Movie]) -> Vec<&str> {
    movies.iter().filter_map(|m| m.title.as_deref()).collect()
}

async fn seed_movies(pool: &SqlitePool) {
    for input in [
        new_movie("Inception", Some(1), Some(10)),
        new_movie("Interstellar", Some(1), Some(20)),
        new_movie("Heat", Some(2), Some(10)),
        new_movie("Orphan", None, None),
    ] {
        MovieRepo::create(pool, &input).await.unwrap();
    }
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_create_and_find(pool: SqlitePool) {
    let created = MovieRepo::create(&pool, &new_movie("Inception", Some(1), Some(2)))
        .await
        .unwrap();

    let found = MovieRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.rating, Some(7.5));
    assert_eq!(found.year, Some(2010));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_find_missing_returns_none(pool: SqlitePool) {
    assert!(MovieRepo::find_by_id(&pool, 424242).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_create_preserves_explicit_id(pool: SqlitePool) {
    let input = CreateMovie {
        id: Some(77),
        ..new_movie("Fixed", None, None)
    };
    let created = MovieRepo::create(&pool, &input).await.unwrap();
    assert_eq!(created.id, 77);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_list_without_filters_returns_all_in_id_order(pool: SqlitePool) {
    seed_movies(&pool).await;

    let movies = MovieRepo::list(&pool, &MovieFilter::default()).await.unwrap();
    assert_eq!(titles(&movies), ["Inception", "Interstellar", "Heat", "Orphan"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_list_filters_by_director(pool: SqlitePool) {
    seed_movies(&pool).await;

    let filter = MovieFilter {
        director_id: Some(1),
        genre_id: None,
    };
    let movies = MovieRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(titles(&movies), ["Inception", "Interstellar"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_list_filters_by_genre(pool: SqlitePool) {
    seed_movies(&pool).await;

    let filter = MovieFilter {
        director_id: None,
        genre_id: Some(10),
    };
    let movies = MovieRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(titles(&movies), ["Inception", "Heat"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_list_combines_filters_with_and(pool: SqlitePool) {
    seed_movies(&pool).await;

    let filter = MovieFilter {
        director_id: Some(1),
        genre_id: Some(10),
    };
    let movies = MovieRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(titles(&movies), ["Inception"]);

    let filter = MovieFilter {
        director_id: Some(2),
        genre_id: Some(20),
    };
    assert!(MovieRepo::list(&pool, &filter).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Directors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn director_crud_cycle(pool: SqlitePool) {
    let created = DirectorRepo::create(
        &pool,
        &CreateDirector {
            name: Some("Nolan".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.name.as_deref(), Some("Nolan"));

    let updated = DirectorRepo::update_name(&pool, created.id, "Christopher Nolan")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name.as_deref(), Some("Christopher Nolan"));

    assert!(DirectorRepo::delete(&pool, created.id).await.unwrap());
    assert!(DirectorRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(!DirectorRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn director_create_allows_null_name(pool: SqlitePool) {
    let created = DirectorRepo::create(&pool, &CreateDirector::default())
        .await
        .unwrap();
    assert!(created.name.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn director_update_missing_returns_none(pool: SqlitePool) {
    let result = DirectorRepo::update_name(&pool, 999, "Nobody").await.unwrap();
    assert!(result.is_none());
    assert!(DirectorRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_ids_are_not_reused(pool: SqlitePool) {
    let first = DirectorRepo::create(&pool, &CreateDirector::default())
        .await
        .unwrap();
    DirectorRepo::delete(&pool, first.id).await.unwrap();

    let second = DirectorRepo::create(&pool, &CreateDirector::default())
        .await
        .unwrap();
    assert!(second.id > first.id);
}

// ---------------------------------------------------------------------------
// Genres and dangling references
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn genre_list_in_id_order(pool: SqlitePool) {
    for name in ["Драма", "Комедия"] {
        GenreRepo::create(
            &pool,
            &CreateGenre {
                name: Some(name.into()),
            },
        )
        .await
        .unwrap();
    }

    let names: Vec<_> = GenreRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .filter_map(|g| g.name)
        .collect();
    assert_eq!(names, ["Драма", "Комедия"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_genre_leaves_movie_reference_dangling(pool: SqlitePool) {
    let genre = GenreRepo::create(
        &pool,
        &CreateGenre {
            name: Some("Триллер".into()),
        },
    )
    .await
    .unwrap();
    let movie = MovieRepo::create(&pool, &new_movie("Se7en", None, Some(genre.id)))
        .await
        .unwrap();

    assert!(GenreRepo::delete(&pool, genre.id).await.unwrap());

    let movie = MovieRepo::find_by_id(&pool, movie.id).await.unwrap().unwrap();
    assert_eq!(movie.genre_id, Some(genre.id));
    assert!(GenreRepo::find_by_id(&pool, genre.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_director_leaves_movie_reference_dangling(pool: SqlitePool) {
    let director = DirectorRepo::create(
        &pool,
        &CreateDirector {
            name: Some("Mann".into()),
        },
    )
    .await
    .unwrap();
    MovieRepo::create(&pool, &new_movie("Heat", Some(director.id), None))
        .await
        .unwrap();

    assert!(DirectorRepo::delete(&pool, director.id).await.unwrap());

    let filter = MovieFilter {
        director_id: Some(director.id),
        genre_id: None,
    };
    let movies = MovieRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(titles(&movies), ["Heat"]);
}
