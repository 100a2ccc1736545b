//! Domain types shared by the catalog database and API crates.
//!
//! Nothing in here touches the database or HTTP; it holds the id type,
//! the entity kinds with their user-facing messages, the domain error and
//! query-filter parsing.

pub mod entity;
pub mod error;
pub mod filter;
pub mod types;
