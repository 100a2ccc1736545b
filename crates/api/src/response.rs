//! Shared response payload types for API handlers.

use catalog_core::types::DbId;
use serde::Serialize;

/// Body returned by every successful create, update and delete.
///
/// Carries the affected id and the fixed localized confirmation message
/// instead of the record itself.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub id: DbId,
    pub message: &'static str,
}
