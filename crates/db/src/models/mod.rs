//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the table row; its
//!   serialized form is the flat JSON projection returned to clients
//! - `Deserialize` DTOs for the writes the API accepts

pub mod director;
pub mod genre;
pub mod movie;
