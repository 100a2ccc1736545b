//! Parsing of movie list query filters.
//!
//! Filters arrive as raw query-string values. An empty value counts as
//! "not supplied"; anything else must be an integer id.

use crate::error::CoreError;
use crate::types::DbId;

/// Equality filters applied to the movie list. Present filters are ANDed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

impl MovieFilter {
    /// Build a filter from raw query-string values.
    pub fn parse(director_id: Option<&str>, genre_id: Option<&str>) -> Result<Self, CoreError> {
        Ok(Self {
            director_id: parse_id_param("director_id", director_id)?,
            genre_id: parse_id_param("genre_id", genre_id)?,
        })
    }
}

/// Parse one optional id parameter. Blank values map to `None`.
pub fn parse_id_param(name: &str, raw: Option<&str>) -> Result<Option<DbId>, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<DbId>()
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("{name} must be an integer, got '{raw}'")))
}
