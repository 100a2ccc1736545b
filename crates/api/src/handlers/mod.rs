//! Request handlers, one submodule per catalog resource.
//!
//! Handlers delegate to the corresponding repository in `catalog_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod director;
pub mod genre;
pub mod movie;
