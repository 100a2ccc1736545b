//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Every method issues a single
//! statement, so each write commits on its own.

pub mod director_repo;
pub mod genre_repo;
pub mod movie_repo;

pub use director_repo::DirectorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
