//! Catalog entity kinds and the fixed, localized messages returned to clients.
//!
//! Clients of the catalog receive human-readable Russian confirmations
//! instead of echoed records, so every mutation outcome maps to exactly one
//! string per entity kind.

use std::fmt;

/// Message returned by the movie list endpoint when no rows match the filters.
pub const NO_MOVIES_FOUND: &str = "Фильмов, удовлетворяющих заданным параметрам, не найдено";

/// The three persisted record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Movie,
    Director,
    Genre,
}

impl EntityKind {
    /// Message for a lookup by id that matched no row.
    pub fn not_found_message(self) -> &'static str {
        match self {
            EntityKind::Movie => "Фильм с заданным ID не найден",
            EntityKind::Director => "Режиссер с заданным ID не найден",
            EntityKind::Genre => "Жанр с заданным ID не найден",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Movie => "Movie",
            EntityKind::Director => "Director",
            EntityKind::Genre => "Genre",
        };
        f.write_str(name)
    }
}

/// Kinds that can be created, renamed and deleted over HTTP.
///
/// Movies are read-only, so they have no confirmation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableKind {
    Director,
    Genre,
}

impl EditableKind {
    pub fn created_message(self) -> &'static str {
        match self {
            EditableKind::Director => "Запись успешно добавлена",
            EditableKind::Genre => "Запись о жанре успешно добавлена",
        }
    }

    pub fn updated_message(self) -> &'static str {
        match self {
            EditableKind::Director => "Изменения в запись о режиссере внесены",
            EditableKind::Genre => "Изменения в запись о жанре внесены",
        }
    }

    pub fn deleted_message(self) -> &'static str {
        match self {
            EditableKind::Director => "Запись о режиссере успешно удалена",
            EditableKind::Genre => "Запись о жанре успешно удалена",
        }
    }
}

impl From<EditableKind> for EntityKind {
    fn from(kind: EditableKind) -> Self {
        match kind {
            EditableKind::Director => EntityKind::Director,
            EditableKind::Genre => EntityKind::Genre,
        }
    }
}
