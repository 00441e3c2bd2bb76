//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts, one trait per entity.
//! - Isolate SQL and stored-representation details from services.
//!
//! # Invariants
//! - Write paths validate models before touching SQL.
//! - Dynamic-shape columns (`key_results`, `assigned_to`) are normalized at
//!   this boundary only; services always see typed structures.
//! - Unparseable stored day values downgrade to `None` instead of failing a
//!   whole row load.

use crate::db::DbError;
use crate::model::ModelValidationError;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_repo;
pub mod okr_repo;
pub mod project_repo;
pub mod task_repo;
pub mod team_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ModelValidationError),
    Db(DbError),
    NotFound {
        entity: &'static str,
        id: i64,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ModelValidationError> for RepoError {
    fn from(value: ModelValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Parses a stored day value (`YYYY-MM-DD`, optionally with a trailing time
/// component written by earlier clients).
///
/// Returns `None` for anything unparseable: a bad date must read as "no
/// date", never fail the row.
pub(crate) fn parse_day(value: Option<String>) -> Option<NaiveDate> {
    let text = value?;
    let trimmed = text.trim();
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(day);
    }
    // Timestamp shapes like `2025-06-05T00:00:00` keep their day prefix.
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Formats a day for storage.
pub(crate) fn day_to_db(value: Option<NaiveDate>) -> Option<String> {
    value.map(|day| day.format("%Y-%m-%d").to_string())
}

/// Decodes a stored JSON id-array column (`assigned_to`).
///
/// `NULL` reads as an empty list; malformed text is a data error because
/// this crate owns every write to the column.
pub(crate) fn parse_id_array(
    value: Option<String>,
    table: &'static str,
    column: &'static str,
) -> RepoResult<Vec<i64>> {
    match value {
        None => Ok(Vec::new()),
        Some(text) => serde_json::from_str(&text).map_err(|err| {
            RepoError::InvalidData(format!("invalid id array in {table}.{column}: {err}"))
        }),
    }
}

/// Encodes an id list for storage; empty lists store as `NULL`.
pub(crate) fn id_array_to_db(ids: &[i64]) -> RepoResult<Option<String>> {
    if ids.is_empty() {
        return Ok(None);
    }
    let encoded = serde_json::to_string(ids)
        .map_err(|err| RepoError::InvalidData(format!("cannot encode id array as JSON: {err}")))?;
    Ok(Some(encoded))
}

#[cfg(test)]
mod tests {
    use super::{day_to_db, id_array_to_db, parse_day, parse_id_array};
    use chrono::NaiveDate;

    #[test]
    fn parse_day_accepts_plain_dates() {
        assert_eq!(
            parse_day(Some("2025-06-05".to_string())),
            NaiveDate::from_ymd_opt(2025, 6, 5)
        );
    }

    #[test]
    fn parse_day_accepts_timestamp_prefix() {
        assert_eq!(
            parse_day(Some("2025-06-05T00:00:00+00:00".to_string())),
            NaiveDate::from_ymd_opt(2025, 6, 5)
        );
    }

    #[test]
    fn parse_day_downgrades_garbage_to_none() {
        assert_eq!(parse_day(Some("next tuesday".to_string())), None);
        assert_eq!(parse_day(Some(String::new())), None);
        assert_eq!(parse_day(None), None);
    }

    #[test]
    fn day_round_trips_through_storage_format() {
        let day = NaiveDate::from_ymd_opt(2025, 12, 31);
        assert_eq!(parse_day(day_to_db(day)), day);
    }

    #[test]
    fn id_arrays_round_trip_and_empty_stores_null() {
        assert_eq!(id_array_to_db(&[]).unwrap(), None);
        let stored = id_array_to_db(&[3, 7]).unwrap();
        assert_eq!(stored.as_deref(), Some("[3,7]"));
        assert_eq!(parse_id_array(stored, "tasks", "assigned_to").unwrap(), vec![3, 7]);
    }

    #[test]
    fn malformed_id_array_is_a_data_error() {
        let err = parse_id_array(Some("{oops".to_string()), "tasks", "assigned_to").unwrap_err();
        assert!(err.to_string().contains("tasks.assigned_to"));
    }
}
