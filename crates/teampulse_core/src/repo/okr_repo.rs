//! Objective (OKR) repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `okrs` table.
//! - Normalize the `key_results` column between its stored JSON text form
//!   and the structured `Vec<KeyResult>` the rest of the crate sees.
//!
//! # Invariants
//! - Writes always store `key_results` as a valid JSON array.
//! - Reads reject text that does not decode as a key-result array; older
//!   rows written as structured JSON or as encoded text both decode through
//!   the same path.

use crate::model::okr::{KeyResult, Okr, OkrId, OkrStatus};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const OKR_SELECT_SQL: &str = "SELECT
    id,
    objective,
    key_results,
    status,
    quarter,
    created_at
FROM okrs";

/// Repository interface for objective CRUD operations.
pub trait OkrRepository {
    /// Persists a draft objective and returns the store-assigned id.
    fn create_okr(&self, okr: &Okr) -> RepoResult<OkrId>;
    fn update_okr(&self, okr: &Okr) -> RepoResult<()>;
    fn get_okr(&self, id: OkrId) -> RepoResult<Option<Okr>>;
    /// Lists all objectives, newest first.
    fn list_okrs(&self) -> RepoResult<Vec<Okr>>;
    fn delete_okr(&self, id: OkrId) -> RepoResult<()>;
}

/// SQLite-backed objective repository over an injected connection.
pub struct SqliteOkrRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteOkrRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl OkrRepository for SqliteOkrRepository<'_> {
    fn create_okr(&self, okr: &Okr) -> RepoResult<OkrId> {
        okr.validate()?;

        self.conn.execute(
            "INSERT INTO okrs (objective, key_results, status, quarter)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                okr.objective.as_str(),
                key_results_to_db(&okr.key_results)?,
                status_to_db(okr.status),
                okr.quarter.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_okr(&self, okr: &Okr) -> RepoResult<()> {
        okr.validate()?;

        let changed = self.conn.execute(
            "UPDATE okrs
             SET
                objective = ?1,
                key_results = ?2,
                status = ?3,
                quarter = ?4
             WHERE id = ?5;",
            params![
                okr.objective.as_str(),
                key_results_to_db(&okr.key_results)?,
                status_to_db(okr.status),
                okr.quarter.as_deref(),
                okr.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "okr",
                id: okr.id,
            });
        }

        Ok(())
    }

    fn get_okr(&self, id: OkrId) -> RepoResult<Option<Okr>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{OKR_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_okr_row(row)?));
        }

        Ok(None)
    }

    fn list_okrs(&self) -> RepoResult<Vec<Okr>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{OKR_SELECT_SQL} ORDER BY id DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut okrs = Vec::new();

        while let Some(row) = rows.next()? {
            okrs.push(parse_okr_row(row)?);
        }

        Ok(okrs)
    }

    fn delete_okr(&self, id: OkrId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM okrs WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "okr", id });
        }

        Ok(())
    }
}

fn parse_okr_row(row: &Row<'_>) -> RepoResult<Okr> {
    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid okr status `{status_text}` in okrs.status"))
    })?;

    let key_results_text: String = row.get("key_results")?;
    let key_results = parse_key_results(&key_results_text)?;

    Ok(Okr {
        id: row.get("id")?,
        objective: row.get("objective")?,
        key_results,
        status,
        quarter: row.get("quarter")?,
        created_at: row.get("created_at")?,
    })
}

/// Decodes the stored `key_results` representation.
///
/// Older clients sometimes double-encoded the array (a JSON string holding
/// JSON), so a string value gets one more decode pass before giving up.
fn parse_key_results(text: &str) -> RepoResult<Vec<KeyResult>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(inner)) => serde_json::from_str(&inner).map_err(|err| {
            RepoError::InvalidData(format!(
                "invalid key result array in okrs.key_results: {err}"
            ))
        }),
        Ok(value) => serde_json::from_value(value).map_err(|err| {
            RepoError::InvalidData(format!(
                "invalid key result array in okrs.key_results: {err}"
            ))
        }),
        Err(err) => Err(RepoError::InvalidData(format!(
            "invalid key result array in okrs.key_results: {err}"
        ))),
    }
}

fn key_results_to_db(key_results: &[KeyResult]) -> RepoResult<String> {
    serde_json::to_string(key_results).map_err(|err| {
        RepoError::InvalidData(format!("cannot encode key results as JSON: {err}"))
    })
}

fn status_to_db(status: OkrStatus) -> &'static str {
    match status {
        OkrStatus::OnTrack => "on-track",
        OkrStatus::AtRisk => "at-risk",
        OkrStatus::OffTrack => "off-track",
    }
}

fn parse_status(value: &str) -> Option<OkrStatus> {
    match value {
        "on-track" => Some(OkrStatus::OnTrack),
        "at-risk" => Some(OkrStatus::AtRisk),
        "off-track" => Some(OkrStatus::OffTrack),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_key_results;

    #[test]
    fn structured_array_decodes() {
        let parsed =
            parse_key_results(r#"[{"description":"mrr","progress":10.0,"target":50.0}]"#).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].description, "mrr");
    }

    #[test]
    fn double_encoded_array_decodes() {
        let parsed = parse_key_results(
            r#""[{\"description\":\"mrr\",\"progress\":10.0,\"target\":50.0}]""#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn empty_text_reads_as_no_key_results() {
        assert!(parse_key_results("").unwrap().is_empty());
        assert!(parse_key_results("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_text_is_a_data_error() {
        assert!(parse_key_results("{nope").is_err());
        assert!(parse_key_results("42").is_err());
    }
}
