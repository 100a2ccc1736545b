use crate::entity::EntityKind;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: EntityKind, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
